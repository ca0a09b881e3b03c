//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DynamicRoutesConfig (validated, immutable)
//!     → handed to ControllerCompiler at construction
//!
//! In watch mode:
//!     watcher.rs detects a manifest change
//!     → registry reloaded
//!     → mounts recompiled with the same config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no global state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ConventionsConfig, DynamicRoutesConfig, EmitConfig, MountConfig, ObservabilityConfig,
};
