// crates/birthday-bound-core/src/scenario.rs
// ============================================================================
// Module: Collision Scenario
// Description: Production-facing risk questions for a named identifier system.
// Purpose: Combine estimator, solver, and catalog into one assessment.
// Dependencies: num-bigint, serde
// ============================================================================

//! ## Overview
//! A [`CollisionScenario`] binds an identifier system to a current item count
//! and a daily growth rate. Every accessor recomputes from those inputs; there
//! is no cached state to invalidate.
//!
//! Division by a non-positive growth rate or a zero item count is reported as
//! [`CollisionError::InvalidArgument`] rather than producing infinity.

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

/// Default acceptable collision risk: one in a million.
pub const DEFAULT_ACCEPTABLE_RISK: f64 = 1e-6;

/// Default horizon for the "approaching" status, in days.
pub const DEFAULT_HORIZON_DAYS: f64 = 365.0;

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// A named system with a current load and a growth rate.
///
/// # Invariants
/// - `acceptable_risk` lies strictly inside `(0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionScenario {
    /// Free-form label.
    name: String,
    /// Identifier scheme in use.
    system: IdentifierSystem,
    /// Identifiers issued so far.
    current_items: u64,
    /// Identifiers issued per day.
    growth_rate: f64,
    /// Risk level that counts as "too high".
    acceptable_risk: f64,
}

impl CollisionScenario {
    /// Creates a scenario with [`DEFAULT_ACCEPTABLE_RISK`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        system: IdentifierSystem,
        current_items: u64,
        growth_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            system,
            current_items,
            growth_rate,
            acceptable_risk: DEFAULT_ACCEPTABLE_RISK,
        }
    }

    /// Replaces the acceptable risk.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::InvalidArgument`] unless `0 < risk < 1`.
    pub fn with_acceptable_risk(mut self, risk: f64) -> CollisionResult<Self> {
        if !(risk > 0.0 && risk < 1.0) {
            return Err(CollisionError::invalid(format!(
                "acceptable risk must lie in (0, 1), got {risk}"
            )));
        }
        self.acceptable_risk = risk;
        Ok(self)
    }

    /// Scenario label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier scheme.
    #[must_use]
    pub const fn system(&self) -> IdentifierSystem {
        self.system
    }

    /// Identifiers issued so far.
    #[must_use]
    pub const fn current_items(&self) -> u64 {
        self.current_items
    }

    /// Identifiers issued per day.
    #[must_use]
    pub const fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Risk level that counts as "too high".
    #[must_use]
    pub const fn acceptable_risk(&self) -> f64 {
        self.acceptable_risk
    }

    /// Item count at which the acceptable risk is reached.
    ///
    /// # Errors
    ///
    /// Propagates solver errors; unreachable for a validated risk.
    pub fn threshold_items(&self) -> CollisionResult<BigUint> {
        find_collision_threshold(&self.system.space_size(), self.acceptable_risk)
    }

    /// Approximate collision probability at the current load.
    #[must_use]
    pub fn current_risk(&self) -> f64 {
        collision_probability(&BigUint::from(self.current_items), &self.system.space_size())
    }

    /// Days of growth left before the acceptable risk is reached.
    ///
    /// Returns `0.0` when the load is already at or past the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::InvalidArgument`] when the threshold is still
    /// ahead and the growth rate is not a positive finite number.
    pub fn days_until_risk(&self) -> CollisionResult<f64> {
        let threshold = self.threshold_items()?;
        let current = BigUint::from(self.current_items);
        if current >= threshold {
            return Ok(0.0);
        }
        if !(self.growth_rate.is_finite() && self.growth_rate > 0.0) {
            return Err(CollisionError::invalid("growth rate must be positive"));
        }
        let remaining = (threshold - current).to_f64().unwrap_or(f64::INFINITY);
        Ok(remaining / self.growth_rate)
    }

    /// How many times the current load fits before a 50% collision chance.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::InvalidArgument`] when `current_items` is zero.
    pub fn safety_factor(&self) -> CollisionResult<f64> {
        if self.current_items == 0 {
            return Err(CollisionError::invalid("current items must be positive"));
        }
        let half = find_collision_threshold(&self.system.space_size(), DEFAULT_TARGET_PROBABILITY)?;
        let half = half.to_f64().unwrap_or(f64::INFINITY);
        #[allow(clippy::cast_precision_loss, reason = "Ratio is reported as a float.")]
        let current = self.current_items as f64;
        Ok(half / current)
    }

    /// Computes every derived figure and a status in one pass.
    ///
    /// Failures of [`Self::days_until_risk`] and [`Self::safety_factor`] are
    /// recorded as `None` rather than aborting the assessment.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError`] when the threshold cannot be solved.
    pub fn assess(&self, horizon_days: f64) -> CollisionResult<ScenarioAssessment> {
        let current_risk = self.current_risk();
        let threshold_items = self.threshold_items()?;
        let days_until_risk = self.days_until_risk().ok();
        let safety_factor = self.safety_factor().ok();
        let status = if current_risk > self.acceptable_risk {
            RiskStatus::Exceeded
        } else {
            match days_until_risk {
                Some(days) if days < horizon_days => RiskStatus::Approaching {
                    days,
                },
                _ => RiskStatus::Safe,
            }
        };
        Ok(ScenarioAssessment {
            name: self.name.clone(),
            system: self.system,
            space: self.system.space_size(),
            current_items: self.current_items,
            growth_rate: self.growth_rate,
            acceptable_risk: self.acceptable_risk,
            current_risk,
            threshold_items,
            days_until_risk,
            safety_factor,
            status,
        })
    }
}

// ============================================================================
// SECTION: Assessment
// ============================================================================

/// Where a scenario stands relative to its acceptable risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskStatus {
    /// Current risk is already above the acceptable level.
    Exceeded,
    /// The threshold will be crossed within the horizon.
    Approaching {
        /// Days left at the current growth rate.
        days: f64,
    },
    /// The threshold is beyond the horizon or never reached.
    Safe,
}

/// Snapshot of every figure derived from a [`CollisionScenario`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAssessment {
    /// Scenario label.
    pub name: String,
    /// Identifier scheme.
    pub system: IdentifierSystem,
    /// Space size of the scheme.
    pub space: SpaceSize,
    /// Identifiers issued so far.
    pub current_items: u64,
    /// Identifiers issued per day.
    pub growth_rate: f64,
    /// Risk level that counts as "too high".
    pub acceptable_risk: f64,
    /// Approximate collision probability now.
    pub current_risk: f64,
    /// Item count at which `acceptable_risk` is reached.
    #[serde(serialize_with = "serialize_biguint")]
    pub threshold_items: BigUint,
    /// Days until `threshold_items`; `None` when growth is not positive.
    pub days_until_risk: Option<f64>,
    /// Multiples of the current load before a 50% chance; `None` at zero load.
    pub safety_factor: Option<f64>,
    /// Overall status.
    pub status: RiskStatus,
}

// ============================================================================
// SECTION: Reference Scenarios
// ============================================================================

/// Four reference workloads spanning the catalog.
#[must_use]
pub fn production_scenarios() -> Vec<CollisionScenario> {
    vec![
        CollisionScenario::new(
            "Startup MVP (32-bit IDs, 1K users/day)",
            IdentifierSystem::Int32,
            10_000,
            1_000.0,
        ),
        CollisionScenario::new(
            "Growing SaaS (64-bit IDs, 100K users/day)",
            IdentifierSystem::Int64,
            10_000_000,
            100_000.0,
        ),
        CollisionScenario::new(
            "Social Platform (64-bit IDs, 10M posts/day)",
            IdentifierSystem::Int64,
            1_000_000_000,
            10_000_000.0,
        ),
        CollisionScenario::new(
            "Distributed Logs (UUID v4, 1B events/day)",
            IdentifierSystem::UuidV4,
            100_000_000_000,
            1_000_000_000.0,
        ),
    ]
}
