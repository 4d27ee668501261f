// crates/birthday-bound-core/src/space.rs
// ============================================================================
// Module: Collision Space
// Description: Arbitrary-precision size of a value domain.
// Purpose: Carry space sizes up to and beyond 2^256 without precision loss.
// Dependencies: num-bigint, num-traits, serde
// ============================================================================

//! ## Overview
//! A collision space is the number of distinct values a generator can
//! produce: 365 birthdays, 2^32 integers, 2^122 random UUID bits. Sizes are
//! held as [`BigUint`] and serialize as decimal strings so they survive JSON
//! round trips at full width.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;
use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::CollisionError;
use crate::error::CollisionResult;

// ============================================================================
// SECTION: Space Size
// ============================================================================

/// Size of a value domain (`d` in the birthday formulas).
///
/// # Invariants
/// - Always >= 1; enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceSize(BigUint);

impl SpaceSize {
    /// Creates a space size, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::InvalidArgument`] when `value` is zero.
    pub fn new(value: BigUint) -> CollisionResult<Self> {
        if value.is_zero() {
            return Err(CollisionError::invalid("space size must be at least 1"));
        }
        Ok(Self(value))
    }

    /// Creates a space size from a machine integer, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::InvalidArgument`] when `value` is zero.
    pub fn from_u64(value: u64) -> CollisionResult<Self> {
        Self::new(BigUint::from(value))
    }

    /// Creates the space `2^bits`.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self(BigUint::one() << bits)
    }

    /// Returns the size as a big integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the wrapper and returns the big integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns the size when it fits in a `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Returns the nearest `f64`, saturating to infinity beyond `f64::MAX`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::INFINITY)
    }

    /// Returns the number of significant bits in the size.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl fmt::Display for SpaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SpaceSize {
    type Err = CollisionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = BigUint::from_str(value.trim()).map_err(|err| {
            CollisionError::invalid(format!("space size must be a decimal integer: {err}"))
        })?;
        Self::new(parsed)
    }
}

impl Serialize for SpaceSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_biguint(&self.0, serializer)
    }
}

/// Wire forms accepted when deserializing a [`SpaceSize`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpaceSize {
    /// Small sizes written as plain integers.
    Number(u64),
    /// Arbitrary sizes written as decimal strings.
    Text(String),
}

impl<'de> Deserialize<'de> for SpaceSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawSpaceSize::deserialize(deserializer)? {
            RawSpaceSize::Number(value) => Self::from_u64(value),
            RawSpaceSize::Text(text) => Self::from_str(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Serde Helpers
// ============================================================================

/// Serializes a big integer as a decimal string.
pub(crate) fn serialize_biguint<S: Serializer>(
    value: &BigUint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
