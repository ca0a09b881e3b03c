//! Convention-based route generation.
//!
//! Controllers are described by [`descriptor::ControllerDescriptor`]s; the
//! [`routing::ControllerCompiler`] turns their public operations into an
//! ordered [`routing::RouteSet`] by naming convention:
//!
//! ```text
//! getUsers()                          → get    users
//! getIndex()                          → get    (base path)
//! postUpdate(User $user, $force=null) → post   update/{user}/{force?}
//! ```
//!
//! Registration ([`registration`]) and listing emission are separate steps
//! the caller performs with the returned routes.

pub mod config;
pub mod descriptor;
pub mod observability;
pub mod registration;
pub mod routing;

pub use config::DynamicRoutesConfig;
pub use descriptor::{ClassResolutionError, ControllerRegistry};
pub use routing::{CompileError, ControllerCompiler, Route, RouteSet};
