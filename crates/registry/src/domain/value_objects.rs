//! # Value Objects
//!
//! Immutable domain primitives for the product registry.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte authenticated caller identity.
///
/// The embedding runtime authenticates callers and hands their identity to
/// every operation; the registry only ever compares addresses for equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// PRODUCT ID
// =============================================================================

/// Sequential product identity assigned by the ledger.
///
/// Ids start at 1, increase by one per registration, and are never reused.
/// `ProductId(0)` never refers to a product.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Debug,
)]
pub struct ProductId(pub u64);

impl ProductId {
    /// The first id the ledger assigns.
    pub const FIRST: Self = Self(1);

    /// Creates a product id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

// =============================================================================
// TIMESTAMP
// =============================================================================

/// Seconds since the Unix epoch, as reported by the runtime clock.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Debug,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp as whole seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SENSOR READING (fixed-point, one implied decimal)
// =============================================================================

/// A fixed-point sensor value with one implied decimal place.
///
/// The raw value 250 denotes 25.0 units; -5 denotes -0.5 units. The registry
/// performs no range validation on readings.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Debug,
)]
pub struct SensorReading(pub i32);

impl SensorReading {
    /// Creates a reading from its raw fixed-point value (tenths of a unit).
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{}", magnitude / 10, magnitude % 10)
    }
}

impl From<i32> for SensorReading {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================
