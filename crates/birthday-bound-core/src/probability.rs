// crates/birthday-bound-core/src/probability.rs
// ============================================================================
// Module: Collision Probability Estimators
// Description: Approximate and exact birthday-collision probabilities.
// Purpose: Estimate P(at least one collision) for n uniform draws from d values.
// Dependencies: bigdecimal, num-bigint, num-traits
// ============================================================================

//! ## Overview
//! Two interchangeable estimators answer the same question:
//!
//! - [`collision_probability`] is the closed-form approximation
//!   `1 - exp(-n(n-1) / 2d)`. The ratio is formed with unbounded integers and
//!   a decimal quotient, so `n` and `d` may be astronomically large; only the
//!   final exponent is converted to `f64`.
//! - [`exact_collision_probability`] multiplies `(d - i) / d` one factor at a
//!   time. It is `O(n)` and exists to cross-check the approximation.
//!
//! Both saturate to exactly `1.0` when `n > d` and return exactly `0.0`
//! when `n <= 1`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;

use crate::space::SpaceSize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Running no-collision product below which the exact form reports `1.0`.
///
/// Tuned for `f64`; a narrower float would need a larger cutoff.
pub const EXACT_SHORT_CIRCUIT: f64 = 1e-15;

// ============================================================================
// SECTION: Estimators
// ============================================================================

/// Approximate probability of at least one collision among `items` draws.
#[must_use]
pub fn collision_probability(items: &BigUint, space: &SpaceSize) -> f64 {
    if items > space.get() {
        return 1.0;
    }
    if *items <= BigUint::one() {
        return 0.0;
    }
    let exponent = birthday_exponent(items, space.get());
    // -expm1(-x) == 1 - exp(-x); keeps digits when x is tiny.
    clamp_probability(-(-exponent).exp_m1())
}

/// Exact probability of at least one collision among `items` draws.
///
/// Iterates once per draw; intended for validation at modest `items`.
#[must_use]
pub fn exact_collision_probability(items: &BigUint, space: &SpaceSize) -> f64 {
    if items > space.get() {
        return 1.0;
    }
    if *items <= BigUint::one() {
        return 0.0;
    }
    let total = space.to_f64();
    if !total.is_finite() {
        // Every factor rounds to 1.0 at f64 width.
        return 0.0;
    }
    // Beyond u64 draws the short circuit fires long before the bound matters.
    let draws = items.to_u64().unwrap_or(u64::MAX);
    let mut no_collision = 1.0_f64;
    for index in 0 .. draws {
        #[allow(clippy::cast_precision_loss, reason = "Draw index is bounded by an f64 space.")]
        let drawn = index as f64;
        no_collision *= (total - drawn) / total;
        if no_collision < EXACT_SHORT_CIRCUIT {
            return 1.0;
        }
    }
    clamp_probability(1.0 - no_collision)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Computes `n(n-1) / 2d` with unbounded integer arithmetic.
fn birthday_exponent(items: &BigUint, space: &BigUint) -> f64 {
    let previous = items.clone() - 1u32;
    let pairs = items * &previous;
    let doubled = BigUint::from(2u32) * space;
    let ratio = BigDecimal::new(BigInt::from(pairs), 0) / BigDecimal::new(BigInt::from(doubled), 0);
    ratio.to_f64().unwrap_or(f64::INFINITY)
}

/// Clamps a probability into `[0.0, 1.0]`.
fn clamp_probability(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
