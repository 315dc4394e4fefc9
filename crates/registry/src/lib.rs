//! # AgriChain Registry - Permissioned Supply-Chain Tracking
//!
//! Tracks physical products through a supply chain: registration by
//! producers, periodic IoT sensor observations, third-party compliance
//! attestations, and lifecycle deactivation. Every mutation is gated by a
//! small role model before it touches state.
//!
//! ## Role Model
//!
//! | Role | Granted | May do |
//! |------|---------|--------|
//! | Owner | At creation; transferable via `transfer_ownership` | Manage the verifier roster, deactivate any product |
//! | Farmer | Per product, to whoever registered it | Add observations to and deactivate that product |
//! | Verifier | By the owner; the creator starts enrolled | Add observations and compliance attestations to any product |
//!
//! ## Operation Surface
//!
//! | Operation | Gate | Event |
//! |-----------|------|-------|
//! | `register_product` | any caller | `ProductRegistered` |
//! | `add_iot_data` | farmer or verifier | `IoTDataAdded` |
//! | `verify_compliance` | verifier only | `ComplianceVerified` |
//! | `add_verifier` / `remove_verifier` | owner only | `VerifierAdded` / `VerifierRemoved` |
//! | `transfer_ownership` | owner only | `OwnershipTransferred` |
//! | `deactivate_product` | farmer or owner | `ProductDeactivated` |
//!
//! ## Runtime Contract
//!
//! The embedding runtime authenticates callers (threaded in as an explicit
//! [`Address`](domain::value_objects::Address) argument), supplies time via
//! the [`Clock`](ports::outbound::Clock) port, and serializes invocations.
//! Each call either fully applies (state write + event) or has no effect;
//! preconditions are checked before the first write. The crate is fully
//! synchronous; embedders sharing a service across threads must add their
//! own mutual exclusion.
//!
//! ## Usage Example
//!
//! ```ignore
//! use agrichain_registry::prelude::*;
//!
//! let mut registry = RegistryService::new(owner, SystemClock::new(), TracingEventSink::new());
//!
//! let id = registry.register_product(farmer, "Organic Apples", "Fruits", "Green Valley Farm", "QmTestHash");
//! registry.add_iot_data(farmer, id, SensorReading::new(250), SensorReading::new(650), "Field A")?;
//! registry.verify_compliance(owner, id, "Organic Certified", true, "zkProofHash123")?;
//! registry.deactivate_product(farmer, id)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{ComplianceRecord, Observation, Product};

    // Value objects
    pub use crate::domain::value_objects::{Address, ProductId, SensorReading, Timestamp};

    // Ledger and roles
    pub use crate::domain::ledger::ProductLedger;
    pub use crate::domain::roles::RoleTable;

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, check_dense_identity_invariant, check_log_alignment_invariant,
        check_owner_enrollment_invariant, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::ProductRegistry;
    pub use crate::ports::outbound::{Clock, EventSink};

    // Events
    pub use crate::events::RegistryEvent;

    // Errors
    pub use crate::errors::RegistryError;

    // Adapters
    pub use crate::adapters::{
        FixedClock, InMemoryEventLog, SequencedEvent, SystemClock, TracingEventSink,
    };

    // Service
    pub use crate::service::{create_test_service, RegistryService, RegistryStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
