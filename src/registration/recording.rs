//! Registrar that records registrations in memory.

use std::convert::Infallible;

use crate::registration::RouteRegistrar;
use crate::routing::{HttpVerb, RouteTarget};

/// One recorded `register(verb, pattern, target)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub verb: HttpVerb,
    pub pattern: String,
    /// Wire form of the target (`Class@operation`).
    pub target: String,
}

/// Collects registrations in call order.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    registrations: Vec<Registration>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn into_registrations(self) -> Vec<Registration> {
        self.registrations
    }
}

impl RouteRegistrar for RecordingRegistrar {
    type Error = Infallible;

    fn register(
        &mut self,
        verb: HttpVerb,
        pattern: &str,
        target: &RouteTarget,
    ) -> Result<(), Self::Error> {
        self.registrations.push(Registration {
            verb,
            pattern: pattern.to_string(),
            target: target.to_string(),
        });
        Ok(())
    }
}
