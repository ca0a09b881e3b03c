//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! compiler. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

use crate::routing::verb::VerbMatching;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DynamicRoutesConfig {
    /// Naming conventions applied by the compiler.
    pub conventions: ConventionsConfig,

    /// Debug listing emission.
    pub emit: EmitConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Controllers to compile, each under its base path.
    pub mounts: Vec<MountConfig>,
}

/// Naming conventions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConventionsConfig {
    /// Fully-qualified request-context type; parameters of this type are
    /// injected by the dispatcher and never appear in a URL.
    pub request_type: String,

    /// Namespace prepended to controller identifiers that do not resolve
    /// on their own (e.g. `UserController`).
    pub controller_namespace: String,

    /// Additional operation names that are never routable. `getMiddleware`
    /// is always reserved and cannot be un-reserved here.
    pub reserved_operations: Vec<String>,

    /// How strictly operation names must start with a verb.
    pub verb_matching: VerbMatching,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            request_type: "Illuminate\\Http\\Request".to_string(),
            controller_namespace: "App\\Http\\Controllers\\".to_string(),
            reserved_operations: Vec::new(),
            verb_matching: VerbMatching::Prefix,
        }
    }
}

/// Route listing emission.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Write a listing of registration statements after each compilation.
    pub enabled: bool,

    /// Directory receiving one listing file per controller.
    pub directory: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: "/tmp/dynamicRoutes".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format (pretty, json).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// A controller compiled under a base path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MountConfig {
    /// Base path (e.g., "api/v1/users").
    #[serde(default)]
    pub path: String,

    /// Controller identifier, short or fully-qualified.
    pub controller: String,
}
