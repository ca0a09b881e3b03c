//! Controller descriptor types.
//!
//! These are read-only views of a controller class. They are produced by
//! whatever introspection facility the host has (a manifest file, code
//! generation, a hand-written registry) and consumed by the route compiler.

use serde::{Deserialize, Serialize};

/// Scalar and pseudo types that never name a class.
const BUILTIN_TYPES: &[&str] = &[
    "int", "float", "string", "bool", "array", "callable", "iterable", "object", "mixed",
    "null", "false", "true", "void", "never",
];

/// Visibility of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A declared parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully-qualified type name (e.g. `App\Models\User`).
    pub name: String,

    /// Explicit builtin flag. Inferred from the type name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
}

impl TypeRef {
    /// Create a type reference; builtin-ness is inferred from the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            builtin: None,
        }
    }

    /// Type name without the nullable marker (`?App\Models\User` -> `App\Models\User`).
    pub fn class_name(&self) -> &str {
        self.name.trim_start_matches('?')
    }

    /// Whether this type is a scalar/pseudo type rather than a class.
    pub fn is_builtin(&self) -> bool {
        self.builtin.unwrap_or_else(|| {
            let name = self.class_name();
            BUILTIN_TYPES
                .iter()
                .any(|b| b.eq_ignore_ascii_case(name))
        })
    }

    /// Last path segment of the type name (`App\Models\User` -> `User`).
    pub fn basename(&self) -> &str {
        let name = self.class_name();
        name.rsplit(['\\', '/', ':']).next().unwrap_or(name)
    }
}

/// A parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Declared type; `None` for untyped parameters.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,

    /// Whether the parameter has a default value (renders as optional).
    #[serde(default)]
    pub has_default: bool,
}

impl Parameter {
    /// Untyped, required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            has_default: false,
        }
    }

    /// Set the declared type.
    pub fn typed(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(TypeRef::new(ty));
        self
    }

    /// Mark the parameter as having a default value.
    pub fn optional(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Name of the declared type without the nullable marker, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.ty.as_ref().map(TypeRef::class_name)
    }
}

/// A candidate operation on a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub visibility: Visibility,
}

impl Operation {
    /// Public operation without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    /// Append a parameter.
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A controller class: its name, optional parent and declared operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerDescriptor {
    /// Fully-qualified class name, used verbatim in route targets.
    pub name: String,

    /// Parent class whose public operations are inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Operations in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            operations: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append an operation.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_inference() {
        assert!(TypeRef::new("int").is_builtin());
        assert!(TypeRef::new("?string").is_builtin());
        assert!(TypeRef::new("Mixed").is_builtin());
        assert!(!TypeRef::new("App\\Models\\User").is_builtin());

        let forced = TypeRef {
            name: "Uuid".into(),
            builtin: Some(true),
        };
        assert!(forced.is_builtin());
    }

    #[test]
    fn test_basename() {
        assert_eq!(TypeRef::new("App\\Models\\User").basename(), "User");
        assert_eq!(TypeRef::new("?App\\Models\\Post").basename(), "Post");
        assert_eq!(TypeRef::new("crate::models::Team").basename(), "Team");
        assert_eq!(TypeRef::new("Invoice").basename(), "Invoice");
    }

    #[test]
    fn test_nullable_type_name() {
        let param = Parameter::new("request").typed("?Illuminate\\Http\\Request");
        assert_eq!(param.type_name(), Some("Illuminate\\Http\\Request"));
        assert_eq!(TypeRef::new("?int").class_name(), "int");
        assert_eq!(Parameter::new("id").type_name(), None);
    }
}
