//! Shared fixtures for integration tests.

use dynamic_routes::descriptor::{
    ControllerDescriptor, ControllerRegistry, Operation, Parameter, Visibility,
};
use dynamic_routes::routing::Route;

pub const REQUEST: &str = "Illuminate\\Http\\Request";
pub const USER_CONTROLLER: &str = "App\\Http\\Controllers\\UserController";

/// Framework base controller, as every application controller extends it.
pub fn base_controller() -> ControllerDescriptor {
    ControllerDescriptor::new("App\\Http\\Controllers\\Controller")
        .operation(Operation::new("getMiddleware"))
        .operation(
            Operation::new("callAction")
                .param(Parameter::new("method").typed("string"))
                .param(Parameter::new("parameters").typed("array")),
        )
        .operation(Operation::new("middleware").param(Parameter::new("middleware")))
}

/// A typical resource-style controller.
pub fn user_controller() -> ControllerDescriptor {
    ControllerDescriptor::new(USER_CONTROLLER)
        .extends("App\\Http\\Controllers\\Controller")
        .operation(Operation::new("getIndex"))
        .operation(Operation::new("getUsers"))
        .operation(
            Operation::new("getShow").param(Parameter::new("user").typed("App\\Models\\User")),
        )
        .operation(
            Operation::new("postUpdate")
                .param(Parameter::new("user").typed("App\\Models\\User"))
                .param(Parameter::new("force").optional()),
        )
        .operation(
            Operation::new("postStore")
                .param(Parameter::new("request").typed(REQUEST)),
        )
        .operation(
            Operation::new("deleteUser")
                .param(Parameter::new("request").typed(REQUEST))
                .param(Parameter::new("id").typed("int")),
        )
        .operation(Operation::new("getExportCsv"))
        .operation(Operation::new("anyWebhook"))
        .operation(Operation::new("helper"))
        .operation(Operation::new("getInternal").with_visibility(Visibility::Private))
}

/// Registry holding the base controller and the user controller.
#[allow(dead_code)]
pub fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.insert(base_controller()).unwrap();
    registry.insert(user_controller()).unwrap();
    registry
}

/// Slugs of a route set, in order.
#[allow(dead_code)]
pub fn slugs(routes: &[Route]) -> Vec<&str> {
    routes.iter().map(|r| r.slug.as_str()).collect()
}

/// Unique scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir()
        .join("dynamic_routes_it")
        .join(format!("{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
