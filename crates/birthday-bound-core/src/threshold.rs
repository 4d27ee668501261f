// crates/birthday-bound-core/src/threshold.rs
// ============================================================================
// Module: Collision Threshold Solver
// Description: Inverse of the approximate collision estimator.
// Purpose: Find how many items fit in a space before a target risk is reached.
// Dependencies: bigdecimal, num-bigint
// ============================================================================

//! ## Overview
//! Solves `p = 1 - exp(-n^2 / 2d)` for `n` in closed form,
//! `n = sqrt(-2 d ln(1 - p))`, and rounds up: a fractional item is not
//! meaningful and the threshold is the first integer at or above the target.
//!
//! `ln(1 - p)` is taken with `ln_1p` so tiny targets keep their digits. The
//! product with `d` and the square root run in [`BigDecimal`], so the solve
//! stays finite for any space size and any target strictly inside `(0, 1)`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_traits::FromPrimitive;
use num_traits::Zero;

use crate::error::CollisionError;
use crate::error::CollisionResult;
use crate::space::SpaceSize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default target probability (the classic "50% chance" question).
pub const DEFAULT_TARGET_PROBABILITY: f64 = 0.5;

// ============================================================================
// SECTION: Solver
// ============================================================================

/// Returns the minimal item count whose approximate collision risk reaches
/// `target`.
///
/// - `target <= 0` returns `0`: even one item exceeds a non-positive risk.
/// - `target >= 1` returns `d + 1`: a collision is only certain once draws
///   exceed the space.
///
/// # Errors
///
/// Returns [`CollisionError::InvalidArgument`] when `target` is NaN.
pub fn find_collision_threshold(space: &SpaceSize, target: f64) -> CollisionResult<BigUint> {
    if target.is_nan() {
        return Err(CollisionError::invalid("target probability must be a number"));
    }
    if target <= 0.0 {
        return Ok(BigUint::zero());
    }
    if target >= 1.0 {
        return Ok(space.get().clone() + 1u32);
    }

    let log_term = -(-target).ln_1p();
    let log_term = BigDecimal::from_f64(log_term).ok_or_else(|| {
        CollisionError::invalid(format!("target probability {target} has no finite log term"))
    })?;
    let doubled = BigInt::from(space.get().clone() * 2u32);
    let radicand = BigDecimal::new(doubled, 0) * log_term;
    let root = radicand
        .sqrt()
        .ok_or_else(|| CollisionError::invalid("threshold radicand must be non-negative"))?;
    ceil_to_biguint(&root)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rounds a non-negative decimal up to the next integer.
fn ceil_to_biguint(value: &BigDecimal) -> CollisionResult<BigUint> {
    let (digits, scale) = value.as_bigint_and_exponent();
    let (sign, magnitude) = digits.into_parts();
    if sign == Sign::Minus {
        return Err(CollisionError::invalid("threshold must be non-negative"));
    }
    let exponent = u32::try_from(scale.unsigned_abs())
        .map_err(|_| CollisionError::unsupported("threshold exponent out of range"))?;
    let power = BigUint::from(10u32).pow(exponent);
    if scale <= 0 {
        return Ok(magnitude * power);
    }
    let quotient = &magnitude / &power;
    if (&magnitude % &power).is_zero() { Ok(quotient) } else { Ok(quotient + 1u32) }
}
