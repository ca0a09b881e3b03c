//! Registration into an `axum::Router`.
//!
//! # Responsibilities
//! - Translate `{name?}` patterns into concrete axum paths
//! - Map verbs onto axum method routers
//! - Attach the route target as a request extension
//! - Refuse registrations axum would panic on
//!
//! # Pattern Translation
//! ```text
//! ""                          → /
//! users/{id}                  → /users/{id}
//! update/{user}/{force?}      → /update/{user}
//!                               /update/{user}/{force}
//! ```

use axum::handler::Handler;
use axum::routing::{any, delete, get, patch, post, put, MethodRouter};
use axum::{Extension, Router};
use std::collections::HashMap;
use std::marker::PhantomData;
use thiserror::Error;

use crate::registration::RouteRegistrar;
use crate::routing::{HttpVerb, RouteTarget};

/// Registration rejected by the axum adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The path is already registered for an overlapping verb, or under the
    /// same shape with different placeholder names.
    #[error("`{verb} {path}` for {target} conflicts with existing `{existing}`")]
    Conflict {
        verb: HttpVerb,
        path: String,
        target: String,
        existing: String,
    },
}

/// A registered path and the verbs bound to it.
#[derive(Debug)]
struct PathEntry {
    path: String,
    verbs: Vec<HttpVerb>,
}

/// Builds an `axum::Router` where every route dispatches to one handler.
///
/// The handler receives the matched route's [`RouteTarget`] through
/// `Extension<RouteTarget>` and can dispatch on it.
pub struct AxumRegistrar<H, T, S = ()> {
    router: Router<S>,
    handler: H,
    /// Keyed by path shape (placeholder names erased).
    paths: HashMap<String, PathEntry>,
    _marker: PhantomData<fn() -> T>,
}

impl<H, T, S> AxumRegistrar<H, T, S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    pub fn new(handler: H) -> Self {
        Self {
            router: Router::new(),
            handler,
            paths: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Finish registration.
    pub fn into_router(self) -> Router<S> {
        self.router
    }

    fn method_router(&self, verb: HttpVerb) -> MethodRouter<S> {
        let handler = self.handler.clone();
        match verb {
            HttpVerb::Any => any(handler),
            HttpVerb::Get => get(handler),
            HttpVerb::Post => post(handler),
            HttpVerb::Put => put(handler),
            HttpVerb::Patch => patch(handler),
            HttpVerb::Delete => delete(handler),
        }
    }

    fn check_conflict(
        &self,
        verb: HttpVerb,
        path: &str,
        target: &RouteTarget,
    ) -> Result<(), RegistrationError> {
        let Some(entry) = self.paths.get(&path_shape(path)) else {
            return Ok(());
        };

        let conflicting = if entry.path != path {
            entry.verbs.first()
        } else {
            entry.verbs.iter().find(|v| verbs_overlap(**v, verb))
        };

        match conflicting {
            Some(existing) => Err(RegistrationError::Conflict {
                verb,
                path: path.to_string(),
                target: target.to_string(),
                existing: format!("{existing} {}", entry.path),
            }),
            None => Ok(()),
        }
    }
}

impl<H, T, S> RouteRegistrar for AxumRegistrar<H, T, S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    type Error = RegistrationError;

    fn register(
        &mut self,
        verb: HttpVerb,
        pattern: &str,
        target: &RouteTarget,
    ) -> Result<(), Self::Error> {
        let paths = axum_paths(pattern);
        for path in &paths {
            self.check_conflict(verb, path, target)?;
        }

        for path in paths {
            let method_router = self
                .method_router(verb)
                .layer(Extension(target.clone()));
            self.router = std::mem::take(&mut self.router).route(&path, method_router);

            self.paths
                .entry(path_shape(&path))
                .or_insert_with(|| PathEntry {
                    path: path.clone(),
                    verbs: Vec::new(),
                })
                .verbs
                .push(verb);
            tracing::debug!(verb = %verb, path = %path, target = %target, "Route registered");
        }
        Ok(())
    }
}

/// Concrete axum paths for a pattern, one per optional-placeholder prefix.
pub fn axum_paths(pattern: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut segments: Vec<String> = Vec::new();

    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        match segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix("?}"))
        {
            Some(name) => {
                paths.push(format!("/{}", segments.join("/")));
                segments.push(format!("{{{name}}}"));
            }
            None => segments.push(segment.to_string()),
        }
    }
    paths.push(format!("/{}", segments.join("/")));
    paths.dedup();
    paths
}

/// Path with placeholder names erased (`/users/{id}` → `/users/{}`).
fn path_shape(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.starts_with('{') && segment.ends_with('}') {
                "{}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn verbs_overlap(a: HttpVerb, b: HttpVerb) -> bool {
    a == b || a == HttpVerb::Any || b == HttpVerb::Any
}
