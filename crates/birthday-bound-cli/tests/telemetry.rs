// crates/birthday-bound-cli/tests/telemetry.rs
// ============================================================================
// Module: Command Event Tests
// Description: Exercises command event serialization and the file sink.
// Purpose: Keep the JSON-lines event format stable for log consumers.
// Dependencies: birthday-bound-cli telemetry module, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Events are one JSON object per line; the file sink appends and never
//! truncates.

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

use birthday_bound_cli::telemetry::CommandEvent;
use birthday_bound_cli::telemetry::CommandOutcome;
use birthday_bound_cli::telemetry::EventSink;
use birthday_bound_cli::telemetry::FileEventSink;
use birthday_bound_cli::telemetry::NoopEventSink;
use serde_json::Value;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn command_event_serializes_expected_fields() {
    let event = CommandEvent::new(
        "validate-threshold",
        CommandOutcome::Failure,
        42,
        Some("threshold too large to simulate".to_string()),
    );
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "command_completed");
    assert_eq!(value["command"], "validate-threshold");
    assert_eq!(value["outcome"], "failure");
    assert_eq!(value["duration_ms"], 42);
    assert_eq!(value["error"], "threshold too large to simulate");
    assert!(value["timestamp_ms"].as_u64().unwrap() > 0);
}

#[test]
fn file_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    {
        let sink = FileEventSink::new(&path).unwrap();
        sink.record(&CommandEvent::new("threshold", CommandOutcome::Success, 1, None));
    }
    let sink = FileEventSink::new(&path).unwrap();
    sink.record(&CommandEvent::new("simulate", CommandOutcome::Success, 9, None));

    let contents = fs::read_to_string(&path).unwrap();
    let commands: Vec<String> = contents
        .lines()
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            value["command"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(commands, vec!["threshold".to_string(), "simulate".to_string()]);
}

#[test]
fn successful_event_has_null_error() {
    let event = CommandEvent::new("reference", CommandOutcome::Success, 0, None);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["outcome"], "success");
    assert!(value["error"].is_null());
}

#[test]
fn noop_sink_accepts_events() {
    let sink = NoopEventSink;
    sink.record(&CommandEvent::new("curve", CommandOutcome::Success, 0, None));
}
