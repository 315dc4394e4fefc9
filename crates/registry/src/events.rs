//! # Lifecycle Events
//!
//! One structured event per successful mutation, published to the configured
//! [`EventSink`](crate::ports::outbound::EventSink) after all state writes of
//! the call. External observers (audit logs, indexers) consume these; the
//! registry itself never reads them back.
//!
//! Registry creation publishes nothing: the creator's enrollment as owner and
//! verifier is silent.

use crate::domain::value_objects::{Address, ProductId, SensorReading};
use serde::{Deserialize, Serialize};

/// A state change worth telling the outside world about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A product entered the registry.
    ProductRegistered {
        /// Freshly assigned id.
        product_id: ProductId,
        /// Product name as registered.
        name: String,
        /// Identity that registered it.
        farmer: Address,
    },

    /// A sensor observation was appended to a product's log.
    IoTDataAdded {
        /// Target product.
        product_id: ProductId,
        /// Recorded temperature.
        temperature: SensorReading,
        /// Recorded humidity.
        humidity: SensorReading,
    },

    /// A compliance attestation was appended to a product's log.
    ComplianceVerified {
        /// Target product.
        product_id: ProductId,
        /// The attested claim.
        claim_type: String,
        /// The verifier's verdict.
        verified: bool,
    },

    /// An identity joined the verifier roster.
    VerifierAdded {
        /// The enrolled identity.
        verifier: Address,
    },

    /// An identity left the verifier roster.
    VerifierRemoved {
        /// The removed identity.
        verifier: Address,
    },

    /// The registry owner changed.
    OwnershipTransferred {
        /// Owner before the transfer.
        previous_owner: Address,
        /// Owner after the transfer.
        new_owner: Address,
    },

    /// A product was marked inactive.
    ///
    /// Published on every successful deactivation call, including repeats on
    /// an already-inactive product; the audit log records calls, not deltas.
    ProductDeactivated {
        /// Target product.
        product_id: ProductId,
    },
}

impl RegistryEvent {
    /// Stable event name for log lines and indexers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProductRegistered { .. } => "ProductRegistered",
            Self::IoTDataAdded { .. } => "IoTDataAdded",
            Self::ComplianceVerified { .. } => "ComplianceVerified",
            Self::VerifierAdded { .. } => "VerifierAdded",
            Self::VerifierRemoved { .. } => "VerifierRemoved",
            Self::OwnershipTransferred { .. } => "OwnershipTransferred",
            Self::ProductDeactivated { .. } => "ProductDeactivated",
        }
    }

    /// The product this event concerns, when there is one.
    #[must_use]
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::ProductRegistered { product_id, .. }
            | Self::IoTDataAdded { product_id, .. }
            | Self::ComplianceVerified { product_id, .. }
            | Self::ProductDeactivated { product_id } => Some(*product_id),
            Self::VerifierAdded { .. }
            | Self::VerifierRemoved { .. }
            | Self::OwnershipTransferred { .. } => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
