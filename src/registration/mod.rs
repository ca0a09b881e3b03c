//! Registration of compiled routes with a dispatcher.
//!
//! # Data Flow
//! ```text
//! RouteSet (ordered)
//!     → register_all (preserves order)
//!     → RouteRegistrar::register(verb, pattern, target)
//!         ├─ recording.rs (in-memory triples)
//!         └─ axum_router.rs (axum::Router with target extensions)
//!
//! Optional, after compilation:
//!     RouteSet → listing.rs → <directory>/<controller>.routes
//! ```
//!
//! # Design Decisions
//! - Registration order is the RouteSet order; adapters must not reorder
//! - Patterns keep `{name}` / `{name?}` syntax; adapters translate

pub mod axum_router;
pub mod listing;
pub mod recording;

pub use axum_router::{AxumRegistrar, RegistrationError};
pub use listing::RouteListing;
pub use recording::RecordingRegistrar;

use crate::routing::{HttpVerb, Route, RouteTarget};

/// A dispatcher that accepts route registrations.
pub trait RouteRegistrar {
    type Error;

    /// Register one route. `pattern` uses `{name}` / `{name?}` placeholders.
    fn register(
        &mut self,
        verb: HttpVerb,
        pattern: &str,
        target: &RouteTarget,
    ) -> Result<(), Self::Error>;
}

/// Register routes in order, stopping at the first failure.
pub fn register_all<R: RouteRegistrar>(registrar: &mut R, routes: &[Route]) -> Result<(), R::Error> {
    for route in routes {
        registrar.register(route.verb, &route.slug, &route.target)?;
    }
    Ok(())
}
