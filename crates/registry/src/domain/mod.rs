//! # Domain Layer (Inner Hexagon)
//!
//! Pure registry state and business rules. NO I/O, NO logging, NO clock —
//! timestamps and identities arrive from the outside. Adapters and the
//! service depend on this layer, never the other way around.

pub mod entities;
pub mod invariants;
pub mod ledger;
pub mod roles;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use ledger::*;
pub use roles::*;
pub use value_objects::*;
