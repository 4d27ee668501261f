// crates/birthday-bound-core/src/id_system.rs
// ============================================================================
// Module: Identifier System Catalog
// Description: Closed catalog of common identifier spaces.
// Purpose: Map named identifier schemes to bit widths and space sizes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The catalog is fixed: four identifier schemes whose collision behavior is
//! fully determined by the number of random (or sequential) bits they carry.
//! Dispatch is an exhaustive `match`, so adding a scheme is a compile-time
//! change rather than a runtime registration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::CollisionError;
use crate::space::SpaceSize;

// ============================================================================
// SECTION: Identifier Systems
// ============================================================================

/// Identifier scheme with a fixed bit width.
///
/// # Invariants
/// - Variants are stable for config parsing and report labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierSystem {
    /// Traditional auto-increment 32-bit integer.
    Int32,
    /// 64-bit integer keys used by modern databases.
    Int64,
    /// Random UUID; 122 of its 128 bits are random.
    UuidV4,
    /// SHA-256 digest.
    Sha256,
}

impl IdentifierSystem {
    /// Every catalog entry in ascending bit-width order.
    pub const ALL: [Self; 4] = [Self::Int32, Self::Int64, Self::UuidV4, Self::Sha256];

    /// Returns the number of distinguishing bits.
    #[must_use]
    pub const fn bit_width(self) -> u32 {
        match self {
            Self::Int32 => 32,
            Self::Int64 => 64,
            Self::UuidV4 => 122,
            Self::Sha256 => 256,
        }
    }

    /// Returns the space size `2^bit_width`.
    #[must_use]
    pub fn space_size(self) -> SpaceSize {
        SpaceSize::from_bits(self.bit_width())
    }

    /// Returns a human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Int32 => "32-bit integer",
            Self::Int64 => "64-bit integer",
            Self::UuidV4 => "UUID version 4",
            Self::Sha256 => "SHA-256 hash",
        }
    }

    /// Returns the stable label used in config files and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UuidV4 => "uuid_v4",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for IdentifierSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierSystem {
    type Err = CollisionError;

    /// Parses a label case-insensitively; `-` is accepted in place of `_`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == normalized)
            .ok_or_else(|| CollisionError::invalid(format!("unknown identifier system: {value}")))
    }
}
