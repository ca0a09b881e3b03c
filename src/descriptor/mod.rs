//! Controller descriptors.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML/JSON) or code
//!     → registry.rs (ControllerRegistry, keyed by class name)
//!     → resolve.rs (identifier → descriptor, namespace fallback)
//!     → types.rs (ControllerDescriptor / Operation / Parameter)
//!     → consumed read-only by the route compiler
//! ```
//!
//! # Design Decisions
//! - Descriptors replace runtime reflection; the compiler never introspects
//! - Resolution is behind the `ClassResolver` trait so hosts can plug in
//!   their own source of class metadata

pub mod registry;
pub mod resolve;
pub mod types;

pub use registry::{ControllerRegistry, Manifest, ManifestError};
pub use resolve::{resolve, ClassResolutionError, ClassResolver};
pub use types::{ControllerDescriptor, Operation, Parameter, TypeRef, Visibility};
