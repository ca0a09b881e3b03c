//! Route ordering.
//!
//! Literal paths are registered before parameterized ones so that a
//! pattern such as `users/{id}` can never shadow `users/export`. Within each
//! group routes are ordered by their slug bytes.

use std::cmp::Ordering;

use crate::routing::route::Route;

/// Precedence of `a` relative to `b`.
pub fn compare(a: &Route, b: &Route) -> Ordering {
    a.is_parameterized()
        .cmp(&b.is_parameterized())
        .then_with(|| a.slug.as_bytes().cmp(b.slug.as_bytes()))
}

/// Sort routes into registration order.
///
/// The sort is stable: routes with identical slugs keep their relative
/// (enumeration) order.
pub fn prioritize(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(compare);
    routes
}
