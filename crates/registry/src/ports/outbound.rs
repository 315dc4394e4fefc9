//! # Driven Ports (SPI - Outbound)
//!
//! What the registry needs from its embedding runtime: a timestamp source
//! and somewhere to deliver lifecycle events. Adapters implement these; the
//! service is generic over them.

use crate::domain::value_objects::Timestamp;
use crate::events::RegistryEvent;

/// Timestamp source.
///
/// The runtime owns time; observation and attestation records are stamped
/// with whatever this returns at insertion.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Destination for lifecycle events.
///
/// The service publishes exactly one event per successful mutation, after
/// all state writes of the call. Delivery is infallible from the registry's
/// point of view; a sink that forwards elsewhere handles its own failures.
pub trait EventSink {
    /// Accepts one published event.
    fn publish(&mut self, event: RegistryEvent);
}
