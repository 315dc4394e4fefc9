//! # Adapters
//!
//! Concrete implementations of the outbound ports: wall-clock and fixed
//! clocks, plus in-memory and tracing-backed event sinks.

pub mod clock;
pub mod event_log;

pub use clock::{FixedClock, SystemClock};
pub use event_log::{InMemoryEventLog, SequencedEvent, TracingEventSink};
