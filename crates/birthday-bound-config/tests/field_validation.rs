//! Field validation tests for birthday-bound-config.
// crates/birthday-bound-config/tests/field_validation.rs
// =============================================================================
// Module: Field Validation Tests
// Description: Range, cross-field, and limit checks on parsed configs.
// Purpose: Ensure invalid settings are rejected with precise messages.
// =============================================================================

use birthday_bound_config::BirthdayBoundConfig;
use birthday_bound_config::LogSinkKind;
use birthday_bound_config::MAX_SCENARIOS;
use birthday_bound_config::MAX_SIMULATION_TRIALS;
use birthday_bound_config::ScenarioConfig;
use birthday_bound_core::IdentifierSystem;

mod common;

use common::TestResult;
use common::assert_invalid;
use common::minimal_config;

fn scenario(name: &str) -> ScenarioConfig {
    ScenarioConfig {
        name: name.to_string(),
        system: IdentifierSystem::Int64,
        current_items: 1_000,
        growth_rate: 10.0,
        acceptable_risk: None,
    }
}

fn base() -> Result<BirthdayBoundConfig, String> {
    minimal_config().map_err(|err| err.to_string())
}

#[test]
fn acceptable_risk_bounds_are_exclusive() -> TestResult {
    for risk in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        let mut config = base()?;
        config.analysis.acceptable_risk = risk;
        assert_invalid(config.validate(), "analysis.acceptable_risk")?;
    }
    Ok(())
}

#[test]
fn horizon_must_be_positive() -> TestResult {
    for horizon in [0.0, -1.0, f64::INFINITY] {
        let mut config = base()?;
        config.analysis.horizon_days = horizon;
        assert_invalid(config.validate(), "horizon_days")?;
    }
    Ok(())
}

#[test]
fn trials_are_bounded() -> TestResult {
    let mut config = base()?;
    config.simulation.trials = MAX_SIMULATION_TRIALS + 1;
    assert_invalid(config.validate(), "exceeds max")?;
    config.simulation.trials = MAX_SIMULATION_TRIALS;
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    let mut config = base()?;
    config.logging.sink = LogSinkKind::File;
    assert_invalid(config.validate(), "required for the file sink")?;
    config.logging.path = Some("   ".to_string());
    assert_invalid(config.validate(), "non-empty")?;
    config.logging.path = Some("events.jsonl".to_string());
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn path_without_file_sink_is_rejected() -> TestResult {
    let mut config = base()?;
    config.logging.sink = LogSinkKind::Stderr;
    config.logging.path = Some("events.jsonl".to_string());
    assert_invalid(config.validate(), "only allowed with the file sink")
}

#[test]
fn scenario_names_must_be_unique_after_trim() -> TestResult {
    let mut config = base()?;
    config.scenarios = vec![scenario("orders"), scenario("  orders ")];
    assert_invalid(config.validate(), "duplicate scenario name: orders")
}

#[test]
fn scenario_name_must_be_present() -> TestResult {
    let mut config = base()?;
    config.scenarios = vec![scenario(" ")];
    assert_invalid(config.validate(), "non-empty")
}

#[test]
fn scenario_growth_rate_must_be_positive() -> TestResult {
    for rate in [0.0, -3.0, f64::NAN] {
        let mut entry = scenario("flat");
        entry.growth_rate = rate;
        let mut config = base()?;
        config.scenarios = vec![entry];
        assert_invalid(config.validate(), "growth_rate must be positive")?;
    }
    Ok(())
}

#[test]
fn scenario_risk_override_is_range_checked() -> TestResult {
    let mut entry = scenario("risky");
    entry.acceptable_risk = Some(1.0);
    let mut config = base()?;
    config.scenarios = vec![entry];
    assert_invalid(config.validate(), "scenario risky: acceptable_risk")
}

#[test]
fn scenario_count_is_limited() -> TestResult {
    let mut config = base()?;
    config.scenarios = (0 ..= MAX_SCENARIOS).map(|index| scenario(&format!("s{index}"))).collect();
    assert_invalid(config.validate(), "max count")
}

#[test]
fn unknown_system_is_a_parse_error() -> TestResult {
    let text = "[[scenarios]]\nname = \"x\"\nsystem = \"int128\"\ncurrent_items = 1\ngrowth_rate = 1.0\n";
    match BirthdayBoundConfig::from_toml_str(text) {
        Err(birthday_bound_config::ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got {other}")),
        Ok(_) => Err("unknown system should fail to parse".to_string()),
    }
}
