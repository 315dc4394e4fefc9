//! # Domain Invariants
//!
//! Structural properties the ledger must uphold at all times. The service
//! preserves them by construction; these checks exist so tests and embedders
//! can verify a ledger snapshot independently.

use crate::domain::ledger::ProductLedger;
use crate::domain::roles::RoleTable;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Dense identity: products are stored in id order and ids run `1..=len`
/// with no gaps and no reuse.
#[must_use]
pub fn check_dense_identity_invariant(ledger: &ProductLedger) -> bool {
    ledger
        .products()
        .iter()
        .enumerate()
        .all(|(i, product)| product.id.value() == i as u64 + 1)
}

/// Log alignment: every registered product has exactly one observation log
/// and one attestation log, and no log exists for an unregistered id.
#[must_use]
pub fn check_log_alignment_invariant(ledger: &ProductLedger) -> bool {
    ledger.observations.len() == ledger.products.len()
        && ledger.attestations.len() == ledger.products.len()
}

/// Owner enrollment: the owner is on the verifier roster.
///
/// Holds immediately after registry creation. An explicit
/// `remove_verifier(owner)` is allowed to break it later, so this check is
/// not part of [`check_all_invariants`].
#[must_use]
pub fn check_owner_enrollment_invariant(roles: &RoleTable) -> bool {
    roles.is_verifier(roles.owner())
}

/// Checks every structural ledger invariant at once.
#[must_use]
pub fn check_all_invariants(ledger: &ProductLedger) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_dense_identity_invariant(ledger) {
        let found = ledger
            .products()
            .iter()
            .enumerate()
            .find(|(i, p)| p.id.value() != *i as u64 + 1)
            .map(|(i, p)| (i, p.id.value()))
            .unwrap_or((0, 0));
        violations.push(InvariantViolation::NonDenseIdentity {
            index: found.0,
            found: found.1,
        });
    }

    if !check_log_alignment_invariant(ledger) {
        violations.push(InvariantViolation::LogMisalignment {
            products: ledger.products.len(),
            observations: ledger.observations.len(),
            attestations: ledger.attestations.len(),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all ledger invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A product's id does not match its table position.
    NonDenseIdentity {
        /// Table index of the offending product.
        index: usize,
        /// Id found at that index.
        found: u64,
    },
    /// Log collections have drifted from the product table.
    LogMisalignment {
        /// Number of registered products.
        products: usize,
        /// Number of observation logs.
        observations: usize,
        /// Number of attestation logs.
        attestations: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonDenseIdentity { index, found } => {
                write!(f, "non-dense identity: index {index} holds id {found}")
            }
            Self::LogMisalignment {
                products,
                observations,
                attestations,
            } => write!(
                f,
                "log misalignment: {products} products, {observations} observation logs, {attestations} attestation logs"
            ),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
