//! Controller class resolution.
//!
//! # Resolution Order
//! ```text
//! identifier                       (direct lookup)
//!     → namespace + identifier     (namespace-qualified fallback)
//!     → ClassResolutionError       (no partial results)
//! ```

use thiserror::Error;

use crate::descriptor::types::ControllerDescriptor;

/// A controller identifier that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("controller class `{identifier}` not found (tried: {})", .attempted.join(", "))]
pub struct ClassResolutionError {
    /// The identifier as given by the caller.
    pub identifier: String,
    /// Every fully-qualified candidate that was looked up.
    pub attempted: Vec<String>,
}

/// Source of controller descriptors keyed by fully-qualified class name.
pub trait ClassResolver: Send + Sync {
    /// Exact lookup of a fully-qualified class name.
    fn lookup(&self, class: &str) -> Option<&ControllerDescriptor>;
}

impl<T: ClassResolver + ?Sized> ClassResolver for &T {
    fn lookup(&self, class: &str) -> Option<&ControllerDescriptor> {
        (**self).lookup(class)
    }
}

impl<T: ClassResolver + ?Sized> ClassResolver for std::sync::Arc<T> {
    fn lookup(&self, class: &str) -> Option<&ControllerDescriptor> {
        (**self).lookup(class)
    }
}

/// Resolve a controller identifier, falling back to `namespace` when the
/// identifier is not a known class on its own.
pub fn resolve<'r, R>(
    resolver: &'r R,
    namespace: &str,
    identifier: &str,
) -> Result<&'r ControllerDescriptor, ClassResolutionError>
where
    R: ClassResolver + ?Sized,
{
    let mut attempted = vec![identifier.to_string()];
    if let Some(descriptor) = resolver.lookup(identifier) {
        return Ok(descriptor);
    }

    if !namespace.is_empty() {
        let qualified = format!("{namespace}{}", identifier.trim_start_matches('\\'));
        if let Some(descriptor) = resolver.lookup(&qualified) {
            return Ok(descriptor);
        }
        attempted.push(qualified);
    }

    Err(ClassResolutionError {
        identifier: identifier.to_string(),
        attempted,
    })
}
