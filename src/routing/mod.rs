//! Routing core: the naming-convention compiler.
//!
//! # Data Flow
//! ```text
//! ControllerDescriptor (resolved by identifier)
//!     → compiler.rs (enumerate public operations)
//!     → verb.rs (classify: name prefix → HttpVerb, or skip)
//!     → slug.rs (remainder + parameters → slug fragment)
//!     → route.rs (base path + slug + verb → Route)
//!     → prioritize.rs (literal before parameterized, then by slug)
//!     → RouteSet (ordered, ready for registration)
//! ```
//!
//! # Design Decisions
//! - Every stage is a pure function; no shared mutable state
//! - Deterministic: same descriptors always yield the same RouteSet
//! - Unroutable operations are filtered, never reported as errors

pub mod compiler;
pub mod prioritize;
pub mod route;
pub mod slug;
pub mod verb;

pub use compiler::{CompileError, ControllerCompiler};
pub use route::{Route, RouteSet, RouteTarget};
pub use verb::{HttpVerb, VerbMatching};
