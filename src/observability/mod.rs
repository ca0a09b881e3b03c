//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Core and adapters produce:
//!     → tracing events (compiled controllers, skipped operations,
//!       registrations, listing writes)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - RUST_LOG overrides the configured level

pub mod logging;
