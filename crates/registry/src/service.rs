//! # Registry Service
//!
//! Wires the domain to the outbound ports: every call runs through one
//! authorization gate, then mutates the ledger or role table, then publishes
//! its lifecycle event. The embedding runtime serializes invocations and
//! authenticates callers; `&mut self` on every mutator keeps the
//! one-at-a-time contract visible in the types.
//!
//! Atomicity is structural: all preconditions are checked before the first
//! state write, so an `Err` return always means "no effect".

use crate::adapters::{FixedClock, InMemoryEventLog};
use crate::domain::entities::{ComplianceRecord, Observation, Product};
use crate::domain::ledger::ProductLedger;
use crate::domain::roles::RoleTable;
use crate::domain::value_objects::{Address, ProductId, SensorReading};
use crate::errors::RegistryError;
use crate::events::RegistryEvent;
use crate::ports::inbound::ProductRegistry;
use crate::ports::outbound::{Clock, EventSink};

use tracing::{debug, info, instrument, warn};

// =============================================================================
// SERVICE STATS
// =============================================================================

/// Operation counters for the lifetime of the service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Products registered.
    pub products_registered: u64,
    /// Observations appended.
    pub observations_recorded: u64,
    /// Compliance records appended.
    pub attestations_recorded: u64,
    /// Products flipped from active to inactive (repeat deactivations of an
    /// already-inactive product are not counted).
    pub products_deactivated: u64,
    /// Calls rejected at the authorization or existence gate.
    pub rejected_calls: u64,
}

// =============================================================================
// REGISTRY SERVICE
// =============================================================================

/// The registry: products, observation and attestation logs, and roles.
///
/// Generic over the runtime collaborators: a [`Clock`] for record timestamps
/// and an [`EventSink`] for lifecycle events.
pub struct RegistryService<C: Clock, E: EventSink> {
    ledger: ProductLedger,
    roles: RoleTable,
    clock: C,
    events: E,
    stats: RegistryStats,
}

impl<C: Clock, E: EventSink> RegistryService<C, E> {
    /// Creates a registry owned by `creator`, who is also enrolled as the
    /// first authorized verifier. No event is published for the enrollment.
    pub fn new(creator: Address, clock: C, events: E) -> Self {
        info!(owner = %creator, "registry created");
        Self {
            ledger: ProductLedger::new(),
            roles: RoleTable::new(creator),
            clock,
            events,
            stats: RegistryStats::default(),
        }
    }

    /// Lifetime operation counters.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    /// The clock this service stamps records with.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The sink receiving lifecycle events.
    pub fn event_sink(&self) -> &E {
        &self.events
    }

    /// Read access to the underlying ledger (invariant checks, snapshots).
    #[must_use]
    pub fn ledger(&self) -> &ProductLedger {
        &self.ledger
    }

    /// Counts and logs a rejection, handing the error back for `return`.
    fn reject(&mut self, error: RegistryError) -> RegistryError {
        self.stats.rejected_calls += 1;
        warn!(%error, "registry call rejected");
        error
    }
}

impl<C: Clock, E: EventSink> ProductRegistry for RegistryService<C, E> {
    #[instrument(skip(self, name, category, origin, metadata_hash))]
    fn register_product(
        &mut self,
        caller: Address,
        name: &str,
        category: &str,
        origin: &str,
        metadata_hash: &str,
    ) -> ProductId {
        let product_id = self.ledger.register(
            name.to_owned(),
            category.to_owned(),
            origin.to_owned(),
            metadata_hash.to_owned(),
            caller,
        );
        self.stats.products_registered += 1;

        info!(%product_id, farmer = %caller, "product registered");
        self.events.publish(RegistryEvent::ProductRegistered {
            product_id,
            name: name.to_owned(),
            farmer: caller,
        });
        product_id
    }

    #[instrument(skip(self, location))]
    fn add_iot_data(
        &mut self,
        caller: Address,
        product_id: ProductId,
        temperature: SensorReading,
        humidity: SensorReading,
        location: &str,
    ) -> Result<(), RegistryError> {
        let farmer = match self.ledger.product(product_id) {
            Some(product) => product.farmer,
            None => return Err(self.reject(RegistryError::ProductNotFound { id: product_id })),
        };
        if caller != farmer && !self.roles.is_verifier(caller) {
            return Err(self.reject(RegistryError::NotFarmerOrVerifier));
        }

        let observation = Observation {
            temperature,
            humidity,
            location: location.to_owned(),
            timestamp: self.clock.now(),
        };
        let appended = self.ledger.record_observation(product_id, observation);
        debug_assert!(appended, "existence was checked above");
        self.stats.observations_recorded += 1;

        debug!(%product_id, %temperature, %humidity, "observation recorded");
        self.events.publish(RegistryEvent::IoTDataAdded {
            product_id,
            temperature,
            humidity,
        });
        Ok(())
    }

    #[instrument(skip(self, claim_type, zk_proof_hash))]
    fn verify_compliance(
        &mut self,
        caller: Address,
        product_id: ProductId,
        claim_type: &str,
        verified: bool,
        zk_proof_hash: &str,
    ) -> Result<(), RegistryError> {
        if !self.ledger.contains(product_id) {
            return Err(self.reject(RegistryError::ProductNotFound { id: product_id }));
        }
        if !self.roles.is_verifier(caller) {
            return Err(self.reject(RegistryError::NotVerifier));
        }

        let record = ComplianceRecord {
            claim_type: claim_type.to_owned(),
            verified,
            zk_proof_hash: zk_proof_hash.to_owned(),
            timestamp: self.clock.now(),
            verifier: caller,
        };
        let appended = self.ledger.record_attestation(product_id, record);
        debug_assert!(appended, "existence was checked above");
        self.stats.attestations_recorded += 1;

        debug!(%product_id, claim_type, verified, "attestation recorded");
        self.events.publish(RegistryEvent::ComplianceVerified {
            product_id,
            claim_type: claim_type.to_owned(),
            verified,
        });
        Ok(())
    }

    #[instrument(skip(self))]
    fn add_verifier(&mut self, caller: Address, verifier: Address) -> Result<(), RegistryError> {
        if !self.roles.is_owner(caller) {
            return Err(self.reject(RegistryError::NotOwner { caller }));
        }

        let newly_enrolled = self.roles.add_verifier(verifier);
        info!(%verifier, newly_enrolled, "verifier enrolled");
        self.events
            .publish(RegistryEvent::VerifierAdded { verifier });
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove_verifier(&mut self, caller: Address, verifier: Address) -> Result<(), RegistryError> {
        if !self.roles.is_owner(caller) {
            return Err(self.reject(RegistryError::NotOwner { caller }));
        }

        // The owner may remove itself; ownership and roster membership are
        // independent capabilities.
        let was_member = self.roles.remove_verifier(verifier);
        info!(%verifier, was_member, "verifier removed");
        self.events
            .publish(RegistryEvent::VerifierRemoved { verifier });
        Ok(())
    }

    #[instrument(skip(self))]
    fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        if !self.roles.is_owner(caller) {
            return Err(self.reject(RegistryError::NotOwner { caller }));
        }

        let previous_owner = self.roles.transfer_ownership(new_owner);
        info!(%previous_owner, %new_owner, "ownership transferred");
        self.events.publish(RegistryEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }

    #[instrument(skip(self))]
    fn deactivate_product(
        &mut self,
        caller: Address,
        product_id: ProductId,
    ) -> Result<(), RegistryError> {
        let (farmer, was_active) = match self.ledger.product(product_id) {
            Some(product) => (product.farmer, product.is_active),
            None => return Err(self.reject(RegistryError::ProductNotFound { id: product_id })),
        };
        if caller != farmer && !self.roles.is_owner(caller) {
            return Err(self.reject(RegistryError::NotFarmerOrOwner));
        }

        if let Some(product) = self.ledger.product_mut(product_id) {
            product.deactivate();
        }
        if was_active {
            self.stats.products_deactivated += 1;
        }

        info!(%product_id, was_active, "product deactivated");
        self.events
            .publish(RegistryEvent::ProductDeactivated { product_id });
        Ok(())
    }

    fn product(&self, product_id: ProductId) -> Result<&Product, RegistryError> {
        self.ledger
            .product(product_id)
            .ok_or(RegistryError::ProductNotFound { id: product_id })
    }

    fn product_observations(
        &self,
        product_id: ProductId,
    ) -> Result<&[Observation], RegistryError> {
        self.ledger
            .observations(product_id)
            .ok_or(RegistryError::ProductNotFound { id: product_id })
    }

    fn product_compliance(
        &self,
        product_id: ProductId,
    ) -> Result<&[ComplianceRecord], RegistryError> {
        self.ledger
            .attestations(product_id)
            .ok_or(RegistryError::ProductNotFound { id: product_id })
    }

    fn current_product_id(&self) -> u64 {
        self.ledger.current_product_id()
    }

    fn owner(&self) -> Address {
        self.roles.owner()
    }

    fn is_authorized_verifier(&self, address: Address) -> bool {
        self.roles.is_verifier(address)
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================

/// Creates a registry wired to a [`FixedClock`] and an [`InMemoryEventLog`],
/// owned by `creator`.
#[must_use]
pub fn create_test_service(creator: Address) -> RegistryService<FixedClock, InMemoryEventLog> {
    RegistryService::new(creator, FixedClock::new(1_700_000_000), InMemoryEventLog::new())
}

// =============================================================================
// TESTS
// =============================================================================
