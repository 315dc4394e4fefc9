//! # Event Sink Adapters
//!
//! Two destinations for lifecycle events: an in-memory audit log that keeps
//! every event as a sequenced record, and a sink that renders each event as
//! one structured JSON log line for host-side collection.

use crate::events::RegistryEvent;
use crate::ports::outbound::EventSink;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

// =============================================================================
// IN-MEMORY EVENT LOG
// =============================================================================

/// One entry of the audit log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencedEvent {
    /// Position in the log, starting at 1.
    pub sequence: u64,
    /// Unique record id for external correlation.
    pub event_id: Uuid,
    /// The published event.
    pub event: RegistryEvent,
}

/// Append-only in-memory audit log.
///
/// Keeps every published event in publication order. This is the sink the
/// test suites inspect; an embedder wanting durable audit would forward from
/// here to its own storage.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEventLog {
    records: Vec<SequencedEvent>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in publication order.
    #[must_use]
    pub fn records(&self) -> &[SequencedEvent] {
        &self.records
    }

    /// The events alone, without their sequencing envelope.
    pub fn events(&self) -> impl Iterator<Item = &RegistryEvent> {
        self.records.iter().map(|record| &record.event)
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&SequencedEvent> {
        self.records.last()
    }

    /// Number of published events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&mut self, event: RegistryEvent) {
        self.records.push(SequencedEvent {
            sequence: self.records.len() as u64 + 1,
            event_id: Uuid::new_v4(),
            event,
        });
    }
}

// =============================================================================
// TRACING EVENT SINK
// =============================================================================

/// Renders each event as one JSON log line via `tracing`.
///
/// Lines carry target `registry::audit` so hosts can route them separately
/// from diagnostic logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Creates the sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn publish(&mut self, event: RegistryEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => {
                info!(
                    target: "registry::audit",
                    event = event.name(),
                    %payload,
                    "registry event"
                );
            }
            Err(err) => {
                warn!(
                    target: "registry::audit",
                    event = event.name(),
                    error = %err,
                    "failed to render registry event"
                );
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
