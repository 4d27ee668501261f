// crates/birthday-bound-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument resolution in the CLI entry point.
// Purpose: Ensure space, locale, horizon, and sink selection behave as documented.
// Dependencies: birthday-bound-cli main helpers, clap, tempfile
// ============================================================================

//! ## Overview
//! Exercises the pure helpers behind `main`: clap parsing rules, space
//! selection, locale resolution, and event sink selection.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use birthday_bound_cli::i18n::Locale;
use birthday_bound_cli::telemetry::CommandEvent;
use birthday_bound_cli::telemetry::CommandOutcome;
use birthday_bound_config::BirthdayBoundConfig;
use birthday_bound_config::LogSinkKind;
use birthday_bound_config::LoggingConfig;
use birthday_bound_config::MAX_SIMULATION_TRIALS;
use birthday_bound_core::IdentifierSystem;
use birthday_bound_core::SpaceSize;
use clap::CommandFactory;
use clap::Parser;

use super::Cli;
use super::Commands;
use super::LangArg;
use super::OutputFormat;
use super::SimulationArgs;
use super::SpaceArgs;
use super::check_validation_size;
use super::format_probability;
use super::group_digits;
use super::open_event_sink;
use super::resolve_horizon;
use super::resolve_locale;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn space_args(space: Option<u64>, bits: Option<u32>, system: Option<IdentifierSystem>) -> SpaceArgs {
    SpaceArgs {
        space: space.map(|value| SpaceSize::from_u64(value).unwrap()),
        bits,
        system,
    }
}

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn space_flags_are_mutually_exclusive() {
    let result = Cli::try_parse_from([
        "birthday-bound",
        "threshold",
        "--bits",
        "32",
        "--system",
        "int64",
    ]);
    assert!(result.is_err());
}

#[test]
fn space_flag_is_required() {
    let result = Cli::try_parse_from(["birthday-bound", "threshold"]);
    assert!(result.is_err());
}

#[test]
fn threshold_defaults_to_half_target() {
    let cli = Cli::try_parse_from(["birthday-bound", "threshold", "--space", "365"]).unwrap();
    let Some(Commands::Threshold(command)) = cli.command else {
        panic!("expected threshold command");
    };
    assert!((command.target - 0.5).abs() < f64::EPSILON);
    assert_eq!(command.space.resolve().unwrap(), SpaceSize::from_u64(365).unwrap());
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from([
        "birthday-bound",
        "reference",
        "--format",
        "json",
        "--lang",
        "ca",
    ])
    .unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.lang, Some(LangArg::Ca)));
    assert!(matches!(cli.command, Some(Commands::Reference)));
}

#[test]
fn probability_accepts_items_beyond_u64() {
    let cli = Cli::try_parse_from([
        "birthday-bound",
        "probability",
        "--system",
        "sha256",
        "--items",
        "100000000000000000000000000",
    ])
    .unwrap();
    let Some(Commands::Probability(command)) = cli.command else {
        panic!("expected probability command");
    };
    assert_eq!(command.items.to_string(), "100000000000000000000000000");
    assert!(!command.exact);
}

#[test]
fn bits_above_limit_are_rejected() {
    let result = Cli::try_parse_from(["birthday-bound", "curve", "--bits", "5000"]);
    assert!(result.is_err());
}

#[test]
fn repeated_rates_are_collected() {
    let cli = Cli::try_parse_from([
        "birthday-bound",
        "time-to-collision",
        "--system",
        "uuid-v4",
        "--rate",
        "1000",
        "--rate",
        "1e9",
    ])
    .unwrap();
    let Some(Commands::TimeToCollision(command)) = cli.command else {
        panic!("expected time-to-collision command");
    };
    assert_eq!(command.rates, vec![1000.0, 1e9]);
}

// ============================================================================
// SECTION: Space and Simulation Resolution
// ============================================================================

#[test]
fn space_resolves_from_each_source() {
    assert_eq!(
        space_args(Some(365), None, None).resolve().unwrap(),
        SpaceSize::from_u64(365).unwrap()
    );
    assert_eq!(space_args(None, Some(32), None).resolve().unwrap(), SpaceSize::from_bits(32));
    assert_eq!(
        space_args(None, None, Some(IdentifierSystem::Int64)).resolve().unwrap(),
        IdentifierSystem::Int64.space_size()
    );
}

#[test]
fn space_without_source_is_an_error() {
    let err = space_args(None, None, None).resolve().unwrap_err();
    assert!(err.to_string().contains("--space"));
}

#[test]
fn simulation_flags_override_config() {
    let config = BirthdayBoundConfig::default();
    let args = SimulationArgs {
        trials: Some(500),
        seed: None,
    };
    let settings = args.resolve(&config).unwrap();
    assert_eq!(settings.trials, 500);
    assert_eq!(settings.seed, config.simulation.seed);

    let args = SimulationArgs {
        trials: None,
        seed: Some(7),
    };
    let settings = args.resolve(&config).unwrap();
    assert_eq!(settings.trials, config.simulation.trials);
    assert_eq!(settings.seed, Some(7));
}

#[test]
fn trials_flag_above_config_ceiling_is_rejected() {
    let config = BirthdayBoundConfig::default();
    let args = SimulationArgs {
        trials: Some(MAX_SIMULATION_TRIALS + 1),
        seed: None,
    };
    let err = args.resolve(&config).unwrap_err();
    assert!(err.to_string().contains(&MAX_SIMULATION_TRIALS.to_string()));

    let args = SimulationArgs {
        trials: Some(MAX_SIMULATION_TRIALS),
        seed: None,
    };
    assert_eq!(args.resolve(&config).unwrap().trials, MAX_SIMULATION_TRIALS);
}

#[test]
fn validation_of_int64_threshold_is_rejected_before_simulating() {
    let space = IdentifierSystem::Int64.space_size();
    let err = check_validation_size(&space, 0.5).unwrap_err();
    assert!(err.to_string().contains("5056937541"), "{err}");
}

#[test]
fn validation_within_item_limit_is_allowed() {
    assert!(check_validation_size(&SpaceSize::from_u64(365).unwrap(), 0.5).is_ok());
    // 2^32 at 50% needs 77,163 items per trial.
    assert!(check_validation_size(&IdentifierSystem::Int32.space_size(), 0.5).is_ok());
}

#[test]
fn validation_of_nan_target_is_an_error() {
    assert!(check_validation_size(&SpaceSize::from_u64(365).unwrap(), f64::NAN).is_err());
}

#[test]
fn horizon_prefers_flag_and_rejects_non_positive() {
    let config = BirthdayBoundConfig::default();
    assert!((resolve_horizon(None, &config).unwrap() - config.analysis.horizon_days).abs() < 1e-9);
    assert!((resolve_horizon(Some(30.0), &config).unwrap() - 30.0).abs() < 1e-9);
    assert!(resolve_horizon(Some(0.0), &config).is_err());
    assert!(resolve_horizon(Some(f64::NAN), &config).is_err());
}

// ============================================================================
// SECTION: Locale
// ============================================================================

#[test]
fn locale_flag_wins_over_env() {
    let locale = resolve_locale(Some(LangArg::En), Some("ca")).unwrap();
    assert_eq!(locale, Locale::En);
}

#[test]
fn locale_env_is_parsed() {
    assert_eq!(resolve_locale(None, Some("ca-ES")).unwrap(), Locale::Ca);
    assert_eq!(resolve_locale(None, None).unwrap(), Locale::En);
}

#[test]
fn invalid_locale_env_is_an_error() {
    let err = resolve_locale(None, Some("xx")).unwrap_err();
    assert!(err.to_string().contains("BIRTHDAY_BOUND_LANG"));
}

// ============================================================================
// SECTION: Event Sinks
// ============================================================================

#[test]
fn event_log_flag_overrides_config_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let logging = LoggingConfig::default();
    let sink = open_event_sink(&logging, Some(&path)).unwrap();
    sink.record(&CommandEvent::new("reference", CommandOutcome::Success, 3, None));
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"command\":\"reference\""));
}

#[test]
fn config_file_sink_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config-events.jsonl");
    let logging = LoggingConfig {
        sink: LogSinkKind::File,
        path: Some(path.display().to_string()),
    };
    let sink = open_event_sink(&logging, None).unwrap();
    sink.record(&CommandEvent::new("curve", CommandOutcome::Success, 1, None));
    sink.record(&CommandEvent::new("curve", CommandOutcome::Failure, 1, Some("bad".to_string())));
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn unopenable_event_log_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("events.jsonl");
    let result = open_event_sink(&LoggingConfig::default(), Some(&path));
    assert!(result.is_err());
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

#[test]
fn probabilities_switch_to_scientific_when_tiny() {
    assert_eq!(format_probability(0.507_297), "0.507297");
    assert_eq!(format_probability(0.0), "0.000000");
    assert_eq!(format_probability(1.157e-6), "1.157e-6");
}

#[test]
fn digits_are_grouped_in_thousands() {
    assert_eq!(group_digits("77163"), "77,163");
    assert_eq!(group_digits("5056937541"), "5,056,937,541");
    assert_eq!(group_digits("999"), "999");
    assert_eq!(group_digits(""), "");
}
