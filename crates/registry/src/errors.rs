//! # Error Types
//!
//! Every precondition the registry rejects. Two kinds cover the whole
//! surface: a missing product id, and a caller lacking the role the requested
//! mutation needs. The authorization variants stay distinct so callers can
//! tell which gate rejected them.

use crate::domain::value_objects::{Address, ProductId};
use thiserror::Error;

/// Rejection reasons for registry operations.
///
/// All rejections are synchronous, non-retryable, and leave no partial
/// state; an operation checks every precondition before its first write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The referenced product id has never been assigned.
    #[error("product not found: {id}")]
    ProductNotFound {
        /// The id that failed to resolve.
        id: ProductId,
    },

    /// Observation append attempted by someone other than the product's
    /// farmer or an authorized verifier.
    #[error("only farmer or authorized verifier may add observation data")]
    NotFarmerOrVerifier,

    /// Attestation append attempted by a non-verifier. Stricter than the
    /// observation gate: the farmer alone cannot self-attest.
    #[error("not an authorized verifier")]
    NotVerifier,

    /// Deactivation attempted by someone other than the product's farmer or
    /// the registry owner.
    #[error("only farmer or owner may deactivate product")]
    NotFarmerOrOwner,

    /// Owner-only administration (verifier roster, ownership transfer)
    /// attempted by a non-owner.
    #[error("caller is not the registry owner: {caller}")]
    NotOwner {
        /// The rejected caller.
        caller: Address,
    },
}

impl RegistryError {
    /// Returns true if the caller lacked a role or ownership.
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        !matches!(self, Self::ProductNotFound { .. })
    }

    /// Returns true if a referenced product id does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================
