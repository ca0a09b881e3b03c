//! In-memory controller registry and manifest loading.
//!
//! A manifest lists controller descriptors in TOML or JSON:
//!
//! ```toml
//! [[controllers]]
//! name = "App\\Http\\Controllers\\UserController"
//! parent = "App\\Http\\Controllers\\Controller"
//!
//! [[controllers.operations]]
//! name = "postUpdate"
//! parameters = [
//!     { name = "user", type = { name = "App\\Models\\User" } },
//!     { name = "force", has_default = true },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::descriptor::resolve::ClassResolver;
use crate::descriptor::types::ControllerDescriptor;

/// Errors raised while loading a descriptor manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("controller `{0}` is declared more than once")]
    DuplicateController(String),
}

/// On-disk manifest layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub controllers: Vec<ControllerDescriptor>,
}

/// Controller descriptors keyed by fully-qualified class name.
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, ControllerDescriptor>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a controller. Class names must be unique.
    pub fn insert(&mut self, descriptor: ControllerDescriptor) -> Result<(), ManifestError> {
        if self.controllers.contains_key(&descriptor.name) {
            return Err(ManifestError::DuplicateController(descriptor.name));
        }
        self.controllers.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, ManifestError> {
        let mut registry = Self::new();
        for descriptor in manifest.controllers {
            registry.insert(descriptor)?;
        }
        Ok(registry)
    }

    /// Load a manifest file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest: Manifest = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        let registry = Self::from_manifest(manifest)?;
        tracing::debug!(
            path = %path.display(),
            controllers = registry.len(),
            "Descriptor manifest loaded"
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl ClassResolver for ControllerRegistry {
    fn lookup(&self, class: &str) -> Option<&ControllerDescriptor> {
        self.controllers.get(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::types::Visibility;

    const MANIFEST: &str = r#"
[[controllers]]
name = "App\\Http\\Controllers\\UserController"
parent = "App\\Http\\Controllers\\Controller"

[[controllers.operations]]
name = "getUsers"

[[controllers.operations]]
name = "postUpdate"
parameters = [
    { name = "user", type = { name = "App\\Models\\User" } },
    { name = "force", has_default = true },
]

[[controllers.operations]]
name = "getHelper"
visibility = "protected"

[[controllers]]
name = "App\\Http\\Controllers\\Controller"
operations = [{ name = "getMiddleware" }]
"#;

    #[test]
    fn test_parse_toml_manifest() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        let registry = ControllerRegistry::from_manifest(manifest).unwrap();
        assert_eq!(registry.len(), 2);

        let users = registry
            .lookup("App\\Http\\Controllers\\UserController")
            .unwrap();
        assert_eq!(users.parent.as_deref(), Some("App\\Http\\Controllers\\Controller"));
        assert_eq!(users.operations.len(), 3);

        let update = &users.operations[1];
        assert_eq!(update.parameters[0].type_name(), Some("App\\Models\\User"));
        assert!(!update.parameters[0].has_default);
        assert!(update.parameters[1].ty.is_none());
        assert!(update.parameters[1].has_default);

        assert_eq!(users.operations[2].visibility, Visibility::Protected);
    }

    #[test]
    fn test_parse_json_manifest() {
        let json = r#"{
            "controllers": [{
                "name": "PostController",
                "operations": [
                    { "name": "getShow", "parameters": [{ "name": "id", "type": { "name": "int" } }] }
                ]
            }]
        }"#;

        let path = std::env::temp_dir().join("dynamic_routes_manifest_test.json");
        fs::write(&path, json).unwrap();
        let registry = ControllerRegistry::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap_or_default();

        let post = registry.lookup("PostController").unwrap();
        let ty = post.operations[0].parameters[0].ty.as_ref().unwrap();
        assert!(ty.is_builtin());
    }

    #[test]
    fn test_duplicate_controller_rejected() {
        let manifest = Manifest {
            controllers: vec![
                ControllerDescriptor::new("Dup"),
                ControllerDescriptor::new("Dup"),
            ],
        };
        let err = ControllerRegistry::from_manifest(manifest).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateController(name) if name == "Dup"));
    }

    #[test]
    fn test_missing_file() {
        let err = ControllerRegistry::from_path(Path::new("/nonexistent/controllers.toml"))
            .unwrap_err();
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
