//! # Access-Control Matrix
//!
//! Every gate in the registry, probed from every side: who gets in, who is
//! turned away, and which distinguishable error each rejection carries.

#[cfg(test)]
mod tests {
    use crate::init_tracing;
    use agrichain_registry::prelude::*;

    const OWNER: Address = Address::new([0xA1; 20]);
    const FARMER: Address = Address::new([0xB2; 20]);
    const VERIFIER: Address = Address::new([0xC3; 20]);
    const STRANGER: Address = Address::new([0xD4; 20]);

    fn registry_with_product() -> (RegistryService<FixedClock, InMemoryEventLog>, ProductId) {
        init_tracing();
        let mut registry = create_test_service(OWNER);
        let id = registry.register_product(FARMER, "Test Product", "Category", "Location", "");
        (registry, id)
    }

    fn reading(raw: i32) -> SensorReading {
        SensorReading::new(raw)
    }

    // =========================================================================
    // OBSERVATION GATE: farmer or verifier
    // =========================================================================

    #[test]
    fn observation_gate_admits_farmer_and_verifiers_only() {
        let (mut registry, id) = registry_with_product();
        registry.add_verifier(OWNER, VERIFIER).unwrap();

        assert!(registry
            .add_iot_data(FARMER, id, reading(250), reading(650), "Field A")
            .is_ok());
        assert!(registry
            .add_iot_data(VERIFIER, id, reading(220), reading(700), "Site")
            .is_ok());
        assert!(registry
            .add_iot_data(OWNER, id, reading(210), reading(710), "Depot")
            .is_ok());

        let err = registry
            .add_iot_data(STRANGER, id, reading(250), reading(650), "Field A")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFarmerOrVerifier);
        assert_eq!(
            err.to_string(),
            "only farmer or authorized verifier may add observation data"
        );
        assert_eq!(registry.product_observations(id).unwrap().len(), 3);
    }

    #[test]
    fn observation_gate_reports_missing_products_first() {
        let (mut registry, _) = registry_with_product();
        let missing = ProductId::new(42);

        let err = registry
            .add_iot_data(FARMER, missing, reading(0), reading(0), "x")
            .unwrap_err();
        assert_eq!(err, RegistryError::ProductNotFound { id: missing });
        assert_eq!(err.to_string(), "product not found: 42");
    }

    // =========================================================================
    // ATTESTATION GATE: verifier only
    // =========================================================================

    #[test]
    fn attestation_gate_excludes_the_farmer() {
        let (mut registry, id) = registry_with_product();

        let err = registry
            .verify_compliance(FARMER, id, "Organic Certified", true, "zkProofHash123")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotVerifier);
        assert_eq!(err.to_string(), "not an authorized verifier");
        assert!(err.is_authorization());

        // Enrolling the farmer as a verifier opens the gate
        registry.add_verifier(OWNER, FARMER).unwrap();
        assert!(registry
            .verify_compliance(FARMER, id, "Organic Certified", true, "zkProofHash123")
            .is_ok());
    }

    #[test]
    fn attestation_gate_closes_behind_a_removed_verifier() {
        let (mut registry, id) = registry_with_product();

        registry.add_verifier(OWNER, VERIFIER).unwrap();
        registry
            .verify_compliance(VERIFIER, id, "Organic", true, "proof")
            .unwrap();

        registry.remove_verifier(OWNER, VERIFIER).unwrap();
        let err = registry
            .verify_compliance(VERIFIER, id, "Organic", true, "proof")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotVerifier);

        // Observation rights went with the roster membership
        let err = registry
            .add_iot_data(VERIFIER, id, reading(1), reading(1), "x")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFarmerOrVerifier);
    }

    #[test]
    fn owner_may_strip_its_own_attestation_rights() {
        let (mut registry, id) = registry_with_product();

        registry.remove_verifier(OWNER, OWNER).unwrap();
        assert!(!registry.is_authorized_verifier(OWNER));

        // Ownership survives; attestation rights do not
        assert_eq!(registry.owner(), OWNER);
        let err = registry
            .verify_compliance(OWNER, id, "Organic", true, "proof")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotVerifier);

        // The owner can re-enroll itself
        registry.add_verifier(OWNER, OWNER).unwrap();
        assert!(registry
            .verify_compliance(OWNER, id, "Organic", true, "proof")
            .is_ok());
    }

    // =========================================================================
    // ROSTER GATE: owner only
    // =========================================================================

    #[test]
    fn roster_mutation_is_owner_only() {
        let (mut registry, _) = registry_with_product();

        let err = registry.add_verifier(FARMER, VERIFIER).unwrap_err();
        assert_eq!(err, RegistryError::NotOwner { caller: FARMER });
        assert!(err.is_authorization());
        assert!(!registry.is_authorized_verifier(VERIFIER));

        let err = registry.remove_verifier(STRANGER, OWNER).unwrap_err();
        assert_eq!(err, RegistryError::NotOwner { caller: STRANGER });
        assert!(registry.is_authorized_verifier(OWNER));
    }

    // =========================================================================
    // DEACTIVATION GATE: farmer or owner
    // =========================================================================

    #[test]
    fn deactivation_gate_admits_farmer_and_owner_only() {
        let (mut registry, id) = registry_with_product();
        registry.add_verifier(OWNER, VERIFIER).unwrap();

        // A verifier is not enough for deactivation
        let err = registry.deactivate_product(VERIFIER, id).unwrap_err();
        assert_eq!(err, RegistryError::NotFarmerOrOwner);
        assert_eq!(
            err.to_string(),
            "only farmer or owner may deactivate product"
        );
        assert!(registry.product(id).unwrap().is_active);

        registry.deactivate_product(OWNER, id).unwrap();
        assert!(!registry.product(id).unwrap().is_active);
    }

    #[test]
    fn deactivation_of_missing_product_is_not_found() {
        let (mut registry, _) = registry_with_product();
        let missing = ProductId::new(7);

        let err = registry.deactivate_product(OWNER, missing).unwrap_err();
        assert_eq!(err, RegistryError::ProductNotFound { id: missing });
        assert!(err.is_not_found());
    }

    // =========================================================================
    // OWNERSHIP TRANSFER
    // =========================================================================

    #[test]
    fn ownership_transfer_moves_every_owner_gate() {
        let (mut registry, id) = registry_with_product();

        registry.transfer_ownership(OWNER, STRANGER).unwrap();
        assert_eq!(registry.owner(), STRANGER);

        // Old owner: roster and deactivation gates now closed
        let err = registry.add_verifier(OWNER, VERIFIER).unwrap_err();
        assert_eq!(err, RegistryError::NotOwner { caller: OWNER });
        let err = registry.deactivate_product(OWNER, id).unwrap_err();
        assert_eq!(err, RegistryError::NotFarmerOrOwner);

        // New owner: gates open, but no implicit verifier enrollment
        registry.add_verifier(STRANGER, VERIFIER).unwrap();
        assert!(!registry.is_authorized_verifier(STRANGER));
        let err = registry
            .verify_compliance(STRANGER, id, "Organic", true, "proof")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotVerifier);

        // Old owner kept its creation-time roster membership
        assert!(registry.is_authorized_verifier(OWNER));
        registry.deactivate_product(STRANGER, id).unwrap();
        assert!(!registry.product(id).unwrap().is_active);
    }

    // =========================================================================
    // REJECTIONS ARE EFFECT-FREE
    // =========================================================================

    #[test]
    fn every_rejection_leaves_state_and_audit_log_untouched() {
        let (mut registry, id) = registry_with_product();
        let events_before = registry.event_sink().len();
        let stats_before = registry.stats();

        assert!(registry
            .add_iot_data(STRANGER, id, reading(1), reading(1), "x")
            .is_err());
        assert!(registry
            .verify_compliance(STRANGER, id, "claim", true, "proof")
            .is_err());
        assert!(registry.add_verifier(STRANGER, STRANGER).is_err());
        assert!(registry.remove_verifier(STRANGER, OWNER).is_err());
        assert!(registry.transfer_ownership(STRANGER, STRANGER).is_err());
        assert!(registry.deactivate_product(STRANGER, id).is_err());

        assert_eq!(registry.event_sink().len(), events_before);
        assert_eq!(registry.product_observations(id).unwrap().len(), 0);
        assert_eq!(registry.product_compliance(id).unwrap().len(), 0);
        assert!(registry.product(id).unwrap().is_active);
        assert_eq!(registry.owner(), OWNER);

        let stats = registry.stats();
        assert_eq!(stats.rejected_calls, stats_before.rejected_calls + 6);
        assert_eq!(stats.observations_recorded, stats_before.observations_recorded);
        assert_eq!(stats.attestations_recorded, stats_before.attestations_recorded);

        assert!(check_all_invariants(registry.ledger()).is_valid());
    }
}
