// crates/birthday-bound-core/src/simulator.rs
// ============================================================================
// Module: Monte Carlo Collision Validator
// Description: Empirical collision probability via repeated random trials.
// Purpose: Cross-check the analytic estimators and threshold solver.
// Dependencies: rand, num-bigint, serde
// ============================================================================

//! ## Overview
//! Each trial draws uniform values from `[0, d)` one at a time and stops at
//! the first repeat. The estimate is `collisions / trials`, with sampling
//! error about `sqrt(p(1 - p) / trials)`.
//!
//! The simulator owns no state between calls. Callers that need
//! reproducible runs either set [`SimulationConfig::seed`] or pass their own
//! generator to [`simulate_collisions_with_rng`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;

use num_bigint::BigUint;
use num_bigint::RandBigInt;
use num_traits::ToPrimitive;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;

use crate::error::CollisionError;
use crate::error::CollisionResult;
use crate::space::SpaceSize;
use crate::space::serialize_biguint;
use crate::threshold::find_collision_threshold;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default number of trials per simulation.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Slack allowed above the simulated probability at the threshold.
pub const THRESHOLD_VALIDATION_SLACK: f64 = 0.05;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Simulation parameters.
///
/// # Invariants
/// - `trials` must be positive when passed to a simulation.
/// - `seed = None` draws a fresh seed from OS entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent trials.
    pub trials: u32,
    /// Optional seed for a reproducible run.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Returns a copy with the given trial count.
    #[must_use]
    pub const fn with_trials(self, trials: u32) -> Self {
        Self {
            trials,
            seed: self.seed,
        }
    }

    /// Returns a copy seeded for reproducibility.
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            trials: self.trials,
            seed: Some(seed),
        }
    }
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Draws per trial.
    pub items: u64,
    /// Space the draws were taken from.
    pub space: SpaceSize,
    /// Number of trials run.
    pub trials: u32,
    /// Trials that saw at least one repeated value.
    pub collisions: u32,
    /// Empirical collision probability.
    pub probability: f64,
    /// Binomial standard error of `probability`.
    pub standard_error: f64,
}

/// Empirical check of a computed threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdValidation {
    /// Space the threshold was solved for.
    pub space: SpaceSize,
    /// Target probability.
    pub target: f64,
    /// Solved threshold.
    #[serde(serialize_with = "serialize_biguint")]
    pub threshold: BigUint,
    /// Simulated probability one item below the threshold.
    pub below: f64,
    /// Simulated probability at the threshold.
    pub at: f64,
    /// Whether `below < target <= at + slack` held.
    pub passed: bool,
}

// ============================================================================
// SECTION: Simulation
// ============================================================================

/// Runs a simulation with a generator built from `config`.
///
/// # Errors
///
/// Returns [`CollisionError::InvalidArgument`] when `config.trials` is zero.
pub fn simulate_collisions(
    items: u64,
    space: &SpaceSize,
    config: &SimulationConfig,
) -> CollisionResult<SimulationReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    simulate_collisions_with_rng(items, space, config.trials, &mut rng)
}

/// Runs a simulation drawing from a caller-owned generator.
///
/// # Errors
///
/// Returns [`CollisionError::InvalidArgument`] when `trials` is zero.
pub fn simulate_collisions_with_rng<R: Rng>(
    items: u64,
    space: &SpaceSize,
    trials: u32,
    rng: &mut R,
) -> CollisionResult<SimulationReport> {
    if trials == 0 {
        return Err(CollisionError::invalid("trials must be positive"));
    }
    let mut sampler = Sampler::for_space(space);
    let mut collisions = 0u32;
    for _ in 0 .. trials {
        if sampler.trial_collides(items, rng) {
            collisions += 1;
        }
    }
    let probability = f64::from(collisions) / f64::from(trials);
    let standard_error = (probability * (1.0 - probability) / f64::from(trials)).sqrt();
    Ok(SimulationReport {
        items,
        space: space.clone(),
        trials,
        collisions,
        probability,
        standard_error,
    })
}

/// Simulates one item below and at the solved threshold for `target`.
///
/// # Errors
///
/// Returns [`CollisionError`] when the target is NaN, trials are zero, or the
/// threshold does not fit a `u64` draw count.
pub fn validate_threshold(
    space: &SpaceSize,
    target: f64,
    config: &SimulationConfig,
) -> CollisionResult<ThresholdValidation> {
    let threshold = find_collision_threshold(space, target)?;
    let at_items = threshold
        .to_u64()
        .ok_or_else(|| CollisionError::unsupported("threshold too large to simulate"))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let below =
        simulate_collisions_with_rng(at_items.saturating_sub(1), space, config.trials, &mut rng)?;
    let at = simulate_collisions_with_rng(at_items, space, config.trials, &mut rng)?;
    let passed = below.probability < target && target <= at.probability + THRESHOLD_VALIDATION_SLACK;
    Ok(ThresholdValidation {
        space: space.clone(),
        target,
        threshold,
        below: below.probability,
        at: at.probability,
        passed,
    })
}

// ============================================================================
// SECTION: Sampling
// ============================================================================

/// Per-trial draw state, specialized on whether the space fits in a `u64`.
enum Sampler {
    /// Spaces up to `u64::MAX` values.
    Narrow {
        /// Exclusive upper bound of draws.
        bound: u64,
        /// Values drawn in the current trial.
        seen: HashSet<u64>,
    },
    /// Spaces beyond `u64::MAX` values.
    Wide {
        /// Exclusive upper bound of draws.
        bound: BigUint,
        /// Values drawn in the current trial.
        seen: HashSet<BigUint>,
    },
}

impl Sampler {
    /// Picks the narrowest representation for `space`.
    fn for_space(space: &SpaceSize) -> Self {
        match space.to_u64() {
            Some(bound) => Self::Narrow {
                bound,
                seen: HashSet::new(),
            },
            None => Self::Wide {
                bound: space.get().clone(),
                seen: HashSet::new(),
            },
        }
    }

    /// Runs one trial and reports whether a value repeated.
    fn trial_collides<R: Rng>(&mut self, items: u64, rng: &mut R) -> bool {
        match self {
            Self::Narrow {
                bound,
                seen,
            } => {
                seen.clear();
                for _ in 0 .. items {
                    if !seen.insert(rng.gen_range(0 .. *bound)) {
                        return true;
                    }
                }
                false
            }
            Self::Wide {
                bound,
                seen,
            } => {
                seen.clear();
                for _ in 0 .. items {
                    if !seen.insert(rng.gen_biguint_below(bound)) {
                        return true;
                    }
                }
                false
            }
        }
    }
}
