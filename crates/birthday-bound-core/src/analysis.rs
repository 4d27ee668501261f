// crates/birthday-bound-core/src/analysis.rs
// ============================================================================
// Module: Collision Analysis Series
// Description: Reference tables and data series built on the estimators.
// Purpose: Feed report and plotting consumers with plain numeric series.
// Dependencies: num-bigint, serde
// ============================================================================

//! ## Overview
//! Series here are plain data. Rendering them (tables, charts) belongs to the
//! caller; this module only decides which points to sample.

// ============================================================================
// SECTION: Imports
// ============================================================================

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::Serialize;

use crate::error::CollisionError;
use crate::error::CollisionResult;
use crate::id_system::IdentifierSystem;
use crate::probability::collision_probability;
use crate::space::SpaceSize;
use crate::space::serialize_biguint;
use crate::threshold::DEFAULT_TARGET_PROBABILITY;
use crate::threshold::find_collision_threshold;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Julian year in seconds.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Smallest item count on a collision curve.
pub const CURVE_MIN_ITEMS: f64 = 10.0;

/// Largest item count on a collision curve.
pub const CURVE_MAX_ITEMS: f64 = 1e15;

/// Curve upper bound as a multiple of `sqrt(d)`.
pub const CURVE_SPAN_FACTOR: f64 = 100.0;

/// Default sample count for a collision curve.
pub const DEFAULT_CURVE_POINTS: usize = 200;

/// Default sample count for the generation-rate series.
pub const DEFAULT_RATE_POINTS: usize = 100;

/// Systems listed in the quick reference table.
pub const REFERENCE_SYSTEMS: [IdentifierSystem; 3] =
    [IdentifierSystem::Int32, IdentifierSystem::Int64, IdentifierSystem::UuidV4];

// ============================================================================
// SECTION: Quick Reference
// ============================================================================

/// 50% collision point of one identifier system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferencePoint {
    /// Identifier scheme.
    pub system: IdentifierSystem,
    /// Bit width of the scheme.
    pub bits: u32,
    /// Space size of the scheme.
    pub space: SpaceSize,
    /// Items at which a collision becomes more likely than not.
    #[serde(serialize_with = "serialize_biguint")]
    pub half_point: BigUint,
}

/// Lists the 50% collision point for each of [`REFERENCE_SYSTEMS`].
///
/// # Errors
///
/// Propagates solver errors; none occur for the fixed catalog.
pub fn quick_reference() -> CollisionResult<Vec<ReferencePoint>> {
    REFERENCE_SYSTEMS
        .into_iter()
        .map(|system| {
            let space = system.space_size();
            let half_point = find_collision_threshold(&space, DEFAULT_TARGET_PROBABILITY)?;
            Ok(ReferencePoint {
                system,
                bits: system.bit_width(),
                space,
                half_point,
            })
        })
        .collect()
}

// ============================================================================
// SECTION: Collision Curve
// ============================================================================

/// One sample of a collision curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Item count.
    pub items: u64,
    /// Approximate collision probability at `items`.
    pub probability: f64,
}

/// Log-spaced probability curve for one space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionCurve {
    /// Space the curve was sampled for.
    pub space: SpaceSize,
    /// Samples in ascending item order, deduplicated.
    pub points: Vec<CurvePoint>,
    /// 50% collision point when it lies inside the sampled range.
    pub half_point: Option<u64>,
}

/// Samples the approximate collision probability on a log scale.
///
/// Item counts run from [`CURVE_MIN_ITEMS`] to
/// `min(sqrt(d) * CURVE_SPAN_FACTOR, CURVE_MAX_ITEMS)`.
///
/// # Errors
///
/// Returns [`CollisionError::InvalidArgument`] when `points < 2`.
pub fn collision_curve(space: &SpaceSize, points: usize) -> CollisionResult<CollisionCurve> {
    if points < 2 {
        return Err(CollisionError::invalid("curve needs at least 2 points"));
    }
    let upper = (space.to_f64().sqrt() * CURVE_SPAN_FACTOR).min(CURVE_MAX_ITEMS);
    let mut samples: Vec<CurvePoint> = Vec::with_capacity(points);
    for value in log_space(CURVE_MIN_ITEMS, upper, points) {
        let items = round_to_u64(value);
        if samples.last().is_some_and(|last| last.items == items) {
            continue;
        }
        samples.push(CurvePoint {
            items,
            probability: collision_probability(&BigUint::from(items), space),
        });
    }
    let half = find_collision_threshold(space, DEFAULT_TARGET_PROBABILITY)?;
    let half_point = half
        .to_u64()
        .filter(|items| samples.last().is_some_and(|last| *items <= last.items));
    Ok(CollisionCurve {
        space: space.clone(),
        points: samples,
        half_point,
    })
}

// ============================================================================
// SECTION: Time To Collision
// ============================================================================

/// Years to a 50% collision chance at one generation rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeToCollision {
    /// Identifiers generated per second.
    pub ids_per_second: f64,
    /// Years until the 50% point.
    pub years: f64,
}

/// Years of continuous generation until a 50% collision chance.
///
/// # Errors
///
/// Returns [`CollisionError::InvalidArgument`] unless `ids_per_second` is a
/// positive finite number.
pub fn years_to_collision(space: &SpaceSize, ids_per_second: f64) -> CollisionResult<f64> {
    if !(ids_per_second.is_finite() && ids_per_second > 0.0) {
        return Err(CollisionError::invalid("generation rate must be positive"));
    }
    let half = find_collision_threshold(space, DEFAULT_TARGET_PROBABILITY)?;
    let half = half.to_f64().unwrap_or(f64::INFINITY);
    Ok(half / (ids_per_second * SECONDS_PER_YEAR))
}

/// Maps [`years_to_collision`] over a list of rates.
///
/// # Errors
///
/// Fails on the first rate that is not positive.
pub fn time_to_collision_series(
    space: &SpaceSize,
    rates: &[f64],
) -> CollisionResult<Vec<TimeToCollision>> {
    rates
        .iter()
        .map(|&ids_per_second| {
            Ok(TimeToCollision {
                ids_per_second,
                years: years_to_collision(space, ids_per_second)?,
            })
        })
        .collect()
}

/// Log-spaced rates from 1 to 1e9 identifiers per second.
#[must_use]
pub fn default_rates() -> Vec<f64> {
    log_space(1.0, 1e9, DEFAULT_RATE_POINTS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns `points` values spaced evenly in log10 from `start` to `end`.
fn log_space(start: f64, end: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![start];
    }
    let low = start.log10();
    let high = end.log10();
    #[allow(clippy::cast_precision_loss, reason = "Sample counts are small.")]
    let steps = (points - 1) as f64;
    (0 .. points)
        .map(|index| {
            #[allow(clippy::cast_precision_loss, reason = "Sample counts are small.")]
            let fraction = index as f64 / steps;
            10f64.powf((high - low).mul_add(fraction, low))
        })
        .collect()
}

/// Rounds a non-negative sample to the nearest item count.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Curve samples are bounded by CURVE_MAX_ITEMS and non-negative."
)]
fn round_to_u64(value: f64) -> u64 {
    value.round() as u64
}
