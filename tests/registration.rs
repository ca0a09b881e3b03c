//! Registration of compiled routes with dispatchers and listings.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::{Extension, Router};
use tower::ServiceExt;

use dynamic_routes::config::loader::parse_config;
use dynamic_routes::config::ConventionsConfig;
use dynamic_routes::registration::recording::Registration;
use dynamic_routes::registration::{
    register_all, AxumRegistrar, RecordingRegistrar, RouteListing,
};
use dynamic_routes::routing::{ControllerCompiler, HttpVerb, RouteTarget};

mod common;

async fn echo_target(Extension(target): Extension<RouteTarget>) -> String {
    target.to_string()
}

async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[test]
fn test_recorded_registrations_follow_route_order() {
    let compiler = ControllerCompiler::new(common::registry(), ConventionsConfig::default());
    let routes = compiler.compile("api/v1", "UserController").unwrap();

    let mut registrar = RecordingRegistrar::new();
    register_all(&mut registrar, &routes).unwrap();

    let registrations = registrar.registrations();
    assert_eq!(registrations.len(), routes.len());
    assert_eq!(
        registrations[0],
        Registration {
            verb: HttpVerb::Get,
            pattern: "api/v1".into(),
            target: format!("{}@getIndex", common::USER_CONTROLLER),
        }
    );
    for (registration, route) in registrations.iter().zip(&routes) {
        assert_eq!(registration.pattern, route.slug);
    }
}

#[tokio::test]
async fn test_axum_router_dispatches_compiled_routes() {
    let compiler = ControllerCompiler::new(common::registry(), ConventionsConfig::default());
    let routes = compiler.compile("api/v1", "UserController").unwrap();

    let mut registrar: AxumRegistrar<_, _> = AxumRegistrar::new(echo_target);
    register_all(&mut registrar, &routes).unwrap();
    let router = registrar.into_router();

    let target = |op: &str| format!("{}@{op}", common::USER_CONTROLLER);

    assert_eq!(send(&router, "GET", "/api/v1").await, (StatusCode::OK, target("getIndex")));
    assert_eq!(send(&router, "GET", "/api/v1/users").await, (StatusCode::OK, target("getUsers")));
    assert_eq!(
        send(&router, "GET", "/api/v1/export-csv").await,
        (StatusCode::OK, target("getExportCsv"))
    );
    assert_eq!(
        send(&router, "POST", "/api/v1/update/42").await,
        (StatusCode::OK, target("postUpdate"))
    );
    assert_eq!(
        send(&router, "POST", "/api/v1/update/42/yes").await,
        (StatusCode::OK, target("postUpdate"))
    );
    assert_eq!(
        send(&router, "DELETE", "/api/v1/user/7").await,
        (StatusCode::OK, target("deleteUser"))
    );
    assert_eq!(
        send(&router, "PATCH", "/api/v1/webhook").await,
        (StatusCode::OK, target("anyWebhook"))
    );

    let (status, _) = send(&router, "GET", "/api/v1/store").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&router, "GET", "/api/v1/middleware").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn test_emitted_listing_matches_routes() {
    let dir = common::scratch_dir("emit");
    let config = parse_config(&format!(
        "[emit]\nenabled = true\ndirectory = {:?}\n",
        dir.display().to_string()
    ))
    .unwrap();
    assert!(config.emit.enabled);

    let compiler = ControllerCompiler::new(common::registry(), config.conventions.clone());
    let routes = compiler.compile("api/v1", "UserController").unwrap();

    let path = RouteListing::write(std::path::Path::new(&config.emit.directory), "UserController", &routes)
        .unwrap();
    let listing = std::fs::read_to_string(&path).unwrap();

    let mut lines = listing.lines();
    assert_eq!(lines.next(), Some("// Routes for UserController"));
    assert_eq!(
        lines.next(),
        Some("Route::get('api/v1', 'App\\Http\\Controllers\\UserController@getIndex');")
    );
    assert_eq!(listing.lines().count(), routes.len() + 1);

    std::fs::remove_dir_all(&dir).unwrap_or_default();
}
