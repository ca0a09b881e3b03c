//! Route records.
//!
//! # Responsibilities
//! - Join a base path with a compiled slug
//! - Pair the path with its verb and handler target
//!
//! # Design Decisions
//! - Targets are structured; `Class@operation` only exists at the boundary
//! - Joined paths never carry a leading, trailing or doubled join slash

use serde::{Serialize, Serializer};
use std::fmt;

use crate::routing::verb::HttpVerb;

/// Handler reference: controller class plus operation name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteTarget {
    pub class: String,
    pub operation: String,
}

impl RouteTarget {
    pub fn new(class: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            operation: operation.into(),
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.class, self.operation)
    }
}

impl Serialize for RouteTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A compiled route definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub verb: HttpVerb,
    /// Full URL pattern relative to the application root.
    pub slug: String,
    pub target: RouteTarget,
}

impl Route {
    /// Whether the pattern contains at least one placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.slug.contains('{')
    }
}

/// Ordered routes for one controller; order is matching precedence.
pub type RouteSet = Vec<Route>;

/// Join the base path with a slug fragment.
///
/// Slashes around either side are trimmed first, so an index slug that only
/// carries placeholders (`/{page?}`) joins as `base/{page?}`.
pub fn join_path(base: &str, slug: &str) -> String {
    let base = base.trim_matches('/');
    let slug = slug.trim_matches('/');
    match (base.is_empty(), slug.is_empty()) {
        (true, _) => slug.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{slug}"),
    }
}

/// Build a route from its compiled parts.
pub fn build_route(base: &str, slug: &str, verb: HttpVerb, class: &str, operation: &str) -> Route {
    Route {
        verb,
        slug: join_path(base, slug),
        target: RouteTarget::new(class, operation),
    }
}
