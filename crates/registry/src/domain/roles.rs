//! # Role Table
//!
//! Owner and verifier roster. Inherited "ownable" behavior is replaced by an
//! explicit owner field and explicit comparisons; every capability check is a
//! plain membership or equality test.

use crate::domain::value_objects::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Owner address plus the set of authorized verifiers.
///
/// The creator becomes the owner and is enrolled as a verifier. Nothing stops
/// the owner from later being removed from the roster; ownership and roster
/// membership are independent capabilities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleTable {
    owner: Address,
    verifiers: HashSet<Address>,
}

impl RoleTable {
    /// Creates the role table for a new registry, enrolling the creator as
    /// both owner and verifier.
    #[must_use]
    pub fn new(creator: Address) -> Self {
        let mut verifiers = HashSet::new();
        verifiers.insert(creator);
        Self {
            owner: creator,
            verifiers,
        }
    }

    /// The current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Returns true if the address is the current owner.
    #[must_use]
    pub fn is_owner(&self, address: Address) -> bool {
        self.owner == address
    }

    /// Returns true if the address is on the verifier roster.
    #[must_use]
    pub fn is_verifier(&self, address: Address) -> bool {
        self.verifiers.contains(&address)
    }

    /// Enrolls a verifier. Idempotent; returns true if newly inserted.
    pub fn add_verifier(&mut self, address: Address) -> bool {
        self.verifiers.insert(address)
    }

    /// Removes a verifier. Idempotent; returns true if it was a member.
    ///
    /// The owner's own membership is not protected.
    pub fn remove_verifier(&mut self, address: Address) -> bool {
        self.verifiers.remove(&address)
    }

    /// Replaces the owner, returning the previous one.
    ///
    /// The verifier roster is untouched: the new owner is not enrolled and
    /// the previous owner keeps any membership it had.
    pub fn transfer_ownership(&mut self, new_owner: Address) -> Address {
        std::mem::replace(&mut self.owner, new_owner)
    }

    /// Number of enrolled verifiers.
    #[must_use]
    pub fn verifier_count(&self) -> usize {
        self.verifiers.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
