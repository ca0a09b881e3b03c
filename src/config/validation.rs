//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate convention values the compiler relies on
//! - Validate emission and logging settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DynamicRoutesConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::DynamicRoutesConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("conventions.request_type must not be empty")]
    EmptyRequestType,

    #[error("conventions.controller_namespace `{0}` must end with `\\`")]
    NamespaceWithoutSeparator(String),

    #[error("conventions.reserved_operations contains an empty name")]
    EmptyReservedOperation,

    #[error("emit.directory must not be empty when emission is enabled")]
    EmptyEmitDirectory,

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.log_format `{0}` is not one of pretty, json")]
    UnknownLogFormat(String),

    #[error("mounts[{0}].controller must not be empty")]
    EmptyMountController(usize),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &DynamicRoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let conventions = &config.conventions;
    if conventions.request_type.trim().is_empty() {
        errors.push(ValidationError::EmptyRequestType);
    }
    let namespace = &conventions.controller_namespace;
    if !namespace.is_empty() && !namespace.ends_with('\\') {
        errors.push(ValidationError::NamespaceWithoutSeparator(namespace.clone()));
    }
    if conventions.reserved_operations.iter().any(|n| n.trim().is_empty()) {
        errors.push(ValidationError::EmptyReservedOperation);
    }

    if config.emit.enabled && config.emit.directory.trim().is_empty() {
        errors.push(ValidationError::EmptyEmitDirectory);
    }

    let observability = &config.observability;
    if !LOG_LEVELS.contains(&observability.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }
    if !LOG_FORMATS.contains(&observability.log_format.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogFormat(observability.log_format.clone()));
    }

    for (i, mount) in config.mounts.iter().enumerate() {
        if mount.controller.trim().is_empty() {
            errors.push(ValidationError::EmptyMountController(i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
