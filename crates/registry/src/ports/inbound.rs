//! # Driving Port (API - Inbound)
//!
//! The registry's entire operation surface. The embedding runtime
//! authenticates callers and serializes invocations; every mutating
//! operation receives the authenticated caller as its first argument and
//! takes `&mut self`, so one-at-a-time invocation is enforced by the borrow
//! checker rather than a lock.

use crate::domain::entities::{ComplianceRecord, Observation, Product};
use crate::domain::value_objects::{Address, ProductId, SensorReading};
use crate::errors::RegistryError;

/// The product registry API.
///
/// Mutators check every precondition before their first state write, so a
/// returned error means the call had no effect. Accessors use one consistent
/// failure mode: any id outside `[1, current_product_id]` is
/// [`RegistryError::ProductNotFound`].
pub trait ProductRegistry {
    /// Registers a product; the caller becomes its farmer of record.
    ///
    /// Assigns the next sequential id and stores the product as active.
    /// Infallible: any authenticated identity may register.
    fn register_product(
        &mut self,
        caller: Address,
        name: &str,
        category: &str,
        origin: &str,
        metadata_hash: &str,
    ) -> ProductId;

    /// Appends a sensor observation to a product's log, stamped with the
    /// runtime clock.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id;
    /// [`RegistryError::NotFarmerOrVerifier`] unless the caller is the
    /// product's farmer or an authorized verifier. Deactivated products
    /// still accept observations.
    fn add_iot_data(
        &mut self,
        caller: Address,
        product_id: ProductId,
        temperature: SensorReading,
        humidity: SensorReading,
        location: &str,
    ) -> Result<(), RegistryError>;

    /// Appends a compliance attestation to a product's log.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id;
    /// [`RegistryError::NotVerifier`] unless the caller is an authorized
    /// verifier — the farmer alone cannot self-attest.
    fn verify_compliance(
        &mut self,
        caller: Address,
        product_id: ProductId,
        claim_type: &str,
        verified: bool,
        zk_proof_hash: &str,
    ) -> Result<(), RegistryError>;

    /// Enrolls an identity on the verifier roster. Idempotent.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotOwner`] unless the caller is the owner.
    fn add_verifier(&mut self, caller: Address, verifier: Address) -> Result<(), RegistryError>;

    /// Removes an identity from the verifier roster. Idempotent. The owner's
    /// own membership is not protected.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotOwner`] unless the caller is the owner.
    fn remove_verifier(&mut self, caller: Address, verifier: Address) -> Result<(), RegistryError>;

    /// Hands the registry to a new owner. The verifier roster is untouched.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotOwner`] unless the caller is the current owner.
    fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError>;

    /// Marks a product inactive. Idempotent; there is no reactivation.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id;
    /// [`RegistryError::NotFarmerOrOwner`] unless the caller is the
    /// product's farmer or the registry owner.
    fn deactivate_product(
        &mut self,
        caller: Address,
        product_id: ProductId,
    ) -> Result<(), RegistryError>;

    /// Looks up a product.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id.
    fn product(&self, product_id: ProductId) -> Result<&Product, RegistryError>;

    /// A product's observation log in insertion order.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id.
    fn product_observations(
        &self,
        product_id: ProductId,
    ) -> Result<&[Observation], RegistryError>;

    /// A product's attestation log in insertion order.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ProductNotFound`] for an unknown id.
    fn product_compliance(
        &self,
        product_id: ProductId,
    ) -> Result<&[ComplianceRecord], RegistryError>;

    /// The highest product id assigned so far; equals the number of
    /// successful registrations.
    fn current_product_id(&self) -> u64;

    /// The current registry owner.
    fn owner(&self) -> Address;

    /// Returns true if the identity is on the verifier roster.
    fn is_authorized_verifier(&self, address: Address) -> bool;
}
