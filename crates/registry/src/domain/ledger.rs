//! # Product Ledger
//!
//! The three append-oriented collections the registry owns: the product table
//! and the per-product observation and attestation logs. Ids are dense, so
//! the table is a plain vector indexed by `id - 1`, and the logs grow in
//! lockstep with it. Nothing here checks authorization; callers gate access
//! before mutating.

use crate::domain::entities::{ComplianceRecord, Observation, Product};
use crate::domain::value_objects::{Address, ProductId};
use serde::{Deserialize, Serialize};

/// Append-oriented store for products and their logs.
///
/// Invariant: `products`, `observations`, and `attestations` always have the
/// same length, and `products[i].id == i + 1`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductLedger {
    pub(crate) products: Vec<Product>,
    pub(crate) observations: Vec<Vec<Observation>>,
    pub(crate) attestations: Vec<Vec<ComplianceRecord>>,
}

impl ProductLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product and returns its freshly assigned id.
    ///
    /// Ids are handed out as `1, 2, 3, ...` in call order and never reused.
    pub fn register(
        &mut self,
        name: String,
        category: String,
        origin: String,
        metadata_hash: String,
        farmer: Address,
    ) -> ProductId {
        let id = ProductId::new(self.products.len() as u64 + 1);
        self.products
            .push(Product::new(id, name, category, origin, metadata_hash, farmer));
        self.observations.push(Vec::new());
        self.attestations.push(Vec::new());
        id
    }

    /// Maps an id to its table slot; `None` outside `[1, len]`.
    fn slot(&self, id: ProductId) -> Option<usize> {
        let raw = id.value();
        if raw >= 1 && raw <= self.products.len() as u64 {
            Some((raw - 1) as usize)
        } else {
            None
        }
    }

    /// Returns true if the id refers to a registered product.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.slot(id).is_some()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.slot(id).map(|i| &self.products[i])
    }

    /// Looks up a product for mutation (lifecycle flag only).
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.slot(id).map(|i| &mut self.products[i])
    }

    /// Appends an observation to a product's log.
    ///
    /// Returns false (and drops the observation) if the id is unknown.
    /// Deactivated products still accept observations.
    pub fn record_observation(&mut self, id: ProductId, observation: Observation) -> bool {
        match self.slot(id) {
            Some(i) => {
                self.observations[i].push(observation);
                true
            }
            None => false,
        }
    }

    /// Appends a compliance record to a product's log.
    ///
    /// Returns false (and drops the record) if the id is unknown.
    /// Deactivated products still accept attestations.
    pub fn record_attestation(&mut self, id: ProductId, record: ComplianceRecord) -> bool {
        match self.slot(id) {
            Some(i) => {
                self.attestations[i].push(record);
                true
            }
            None => false,
        }
    }

    /// Returns a product's observation log in insertion order.
    #[must_use]
    pub fn observations(&self, id: ProductId) -> Option<&[Observation]> {
        self.slot(id).map(|i| self.observations[i].as_slice())
    }

    /// Returns a product's attestation log in insertion order.
    #[must_use]
    pub fn attestations(&self, id: ProductId) -> Option<&[ComplianceRecord]> {
        self.slot(id).map(|i| self.attestations[i].as_slice())
    }

    /// The highest id assigned so far; equals the number of registrations.
    #[must_use]
    pub fn current_product_id(&self) -> u64 {
        self.products.len() as u64
    }

    /// All registered products in id order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of registered products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
