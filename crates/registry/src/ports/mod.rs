//! # Ports
//!
//! Boundary traits of the registry. Inbound is what callers drive; outbound
//! is what the registry asks of the embedding runtime (time, event
//! delivery).

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
