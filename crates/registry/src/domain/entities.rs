//! # Core Domain Entities
//!
//! The records the registry maintains: products, sensor observations, and
//! compliance attestations. Products carry the only mutable field in the
//! whole data model (`is_active`); observations and attestations are
//! immutable once appended.

use crate::domain::value_objects::{Address, ProductId, SensorReading, Timestamp};
use serde::{Deserialize, Serialize};

// =============================================================================
// PRODUCT
// =============================================================================

/// A registered physical product.
///
/// Everything except `is_active` is fixed at registration time. The
/// `metadata_hash` is an opaque content reference (e.g. an off-chain document
/// pointer) that the registry stores but never resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential identity assigned by the ledger.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Origin location.
    pub origin: String,
    /// Opaque reference to off-chain product metadata.
    pub metadata_hash: String,
    /// Identity that registered the product. Immutable.
    pub farmer: Address,
    /// Lifecycle flag; starts `true`, settable to `false` only.
    pub is_active: bool,
}

impl Product {
    /// Creates an active product record.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: String,
        category: String,
        origin: String,
        metadata_hash: String,
        farmer: Address,
    ) -> Self {
        Self {
            id,
            name,
            category,
            origin,
            metadata_hash,
            farmer,
            is_active: true,
        }
    }

    /// Marks the product inactive. Idempotent; there is no way back.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

// =============================================================================
// OBSERVATION (IoT data point)
// =============================================================================

/// A single timestamped sensor reading appended to a product's log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Temperature in tenths of a unit.
    pub temperature: SensorReading,
    /// Relative humidity in tenths of a percent.
    pub humidity: SensorReading,
    /// Where the reading was taken.
    pub location: String,
    /// Insertion time from the runtime clock.
    pub timestamp: Timestamp,
}

// =============================================================================
// COMPLIANCE RECORD
// =============================================================================

/// A single timestamped attestation appended to a product's log.
///
/// The `verified` flag is the submitting verifier's decision at creation time
/// and is never re-evaluated. The `zk_proof_hash` points at an externally
/// verifiable proof artifact; the registry does not validate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Free-text description of the certification or claim.
    pub claim_type: String,
    /// The verifier's verdict at submission time.
    pub verified: bool,
    /// Opaque reference to the proof artifact.
    pub zk_proof_hash: String,
    /// Insertion time from the runtime clock.
    pub timestamp: Timestamp,
    /// Identity of the authenticated submitter.
    pub verifier: Address,
}

// =============================================================================
// TESTS
// =============================================================================
