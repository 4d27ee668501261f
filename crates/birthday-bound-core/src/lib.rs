// crates/birthday-bound-core/src/lib.rs
// ============================================================================
// Module: Birthday Bound Core
// Description: Birthday-paradox collision estimators for identifier spaces.
// Purpose: Answer "how likely is a collision" and "how many IDs until it is".
// Dependencies: bigdecimal, num-bigint, rand, serde, thiserror
// ============================================================================

//! ## Overview
//! Pure, synchronous computations over identifier spaces:
//!
//! - [`collision_probability`] and [`exact_collision_probability`] estimate
//!   the chance of at least one repeat among `n` uniform draws from `d`
//!   values.
//! - [`find_collision_threshold`] inverts the approximation to find the first
//!   `n` that reaches a target probability.
//! - [`simulate_collisions`] checks both empirically.
//! - [`IdentifierSystem`] names the common identifier spaces and
//!   [`CollisionScenario`] turns all of the above into production answers.
//!
//! Invariants:
//! - Probabilities are always in `[0, 1]`.
//! - Space sizes are at least 1; counts are unsigned.
//! - Invalid inputs fail with [`CollisionError`] instead of yielding NaN.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod id_system;
pub mod probability;
pub mod scenario;
pub mod simulator;
pub mod space;
pub mod threshold;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use analysis::CollisionCurve;
pub use analysis::CurvePoint;
pub use analysis::ReferencePoint;
pub use analysis::TimeToCollision;
pub use analysis::collision_curve;
pub use analysis::default_rates;
pub use analysis::quick_reference;
pub use analysis::time_to_collision_series;
pub use analysis::years_to_collision;
pub use error::CollisionError;
pub use error::CollisionResult;
pub use id_system::IdentifierSystem;
pub use probability::collision_probability;
pub use probability::exact_collision_probability;
pub use scenario::CollisionScenario;
pub use scenario::RiskStatus;
pub use scenario::ScenarioAssessment;
pub use scenario::production_scenarios;
pub use simulator::SimulationConfig;
pub use simulator::SimulationReport;
pub use simulator::ThresholdValidation;
pub use simulator::simulate_collisions;
pub use simulator::simulate_collisions_with_rng;
pub use simulator::validate_threshold;
pub use space::SpaceSize;
pub use threshold::find_collision_threshold;
