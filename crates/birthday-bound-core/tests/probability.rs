// crates/birthday-bound-core/tests/probability.rs
// ============================================================================
// Module: Collision Probability Tests
// Description: Known values and edge cases for both estimators.
// Purpose: Pin the approximate and exact forms to textbook results.
// ============================================================================

//! Collision probability estimator tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only assertions and helpers are permitted."
)]

use birthday_bound_core::IdentifierSystem;
use birthday_bound_core::SpaceSize;
use birthday_bound_core::collision_probability;
use birthday_bound_core::exact_collision_probability;
use num_bigint::BigUint;

fn n(value: u64) -> BigUint {
    BigUint::from(value)
}

fn birthdays() -> SpaceSize {
    SpaceSize::from_u64(365).unwrap()
}

#[test]
fn birthday_problem_approximation_is_near_half() {
    let p = collision_probability(&n(23), &birthdays());
    assert!((p - 0.5).abs() < 0.001, "got {p}");
}

#[test]
fn birthday_problem_exact_matches_textbook() {
    let p = exact_collision_probability(&n(23), &birthdays());
    assert!((p - 0.507_297).abs() < 1e-5, "got {p}");
}

#[test]
fn zero_and_one_items_never_collide() {
    let space = birthdays();
    for items in [0, 1] {
        assert_eq!(collision_probability(&n(items), &space), 0.0);
        assert_eq!(exact_collision_probability(&n(items), &space), 0.0);
    }
}

#[test]
fn more_items_than_space_is_certain() {
    let space = birthdays();
    assert_eq!(collision_probability(&n(366), &space), 1.0);
    assert_eq!(exact_collision_probability(&n(366), &space), 1.0);
}

#[test]
fn full_space_exact_short_circuits_to_one() {
    assert_eq!(exact_collision_probability(&n(365), &birthdays()), 1.0);
}

#[test]
fn single_value_space_collides_on_second_draw() {
    let space = SpaceSize::from_u64(1).unwrap();
    assert_eq!(collision_probability(&n(1), &space), 0.0);
    assert_eq!(collision_probability(&n(2), &space), 1.0);
}

#[test]
fn two_draws_from_two_values_is_half_exactly() {
    let space = SpaceSize::from_u64(2).unwrap();
    assert!((exact_collision_probability(&n(2), &space) - 0.5).abs() < 1e-12);
}

#[test]
fn tiny_probabilities_keep_precision() {
    let space = IdentifierSystem::UuidV4.space_size();
    let p = collision_probability(&n(1_000_000), &space);
    // n(n-1)/2d for one million UUIDs.
    let expected = 999_999_000_000.0 / 2.0 / 2f64.powi(122);
    assert!(p > 0.0);
    assert!(((p - expected) / expected).abs() < 1e-9, "got {p}, expected {expected}");
}

#[test]
fn sha256_space_handles_huge_counts() {
    let space = IdentifierSystem::Sha256.space_size();
    let items = BigUint::from(1u32) << 128;
    let p = collision_probability(&items, &space);
    assert!((0.0 ..= 1.0).contains(&p));
    assert!((p - 0.393_469).abs() < 1e-5, "got {p}");
}

#[test]
fn exact_form_on_unrepresentable_space_reports_zero() {
    let huge = SpaceSize::new(BigUint::from(1u32) << 2000).unwrap();
    assert_eq!(exact_collision_probability(&n(1_000), &huge), 0.0);
}

#[test]
fn approximation_tracks_exact_for_int32() {
    let space = IdentifierSystem::Int32.space_size();
    let approx = collision_probability(&n(10_000), &space);
    let exact = exact_collision_probability(&n(10_000), &space);
    assert!((approx - 0.011_573).abs() < 1e-5, "got {approx}");
    assert!((approx - exact).abs() < 1e-6, "approx {approx} exact {exact}");
}
