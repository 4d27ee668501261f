// crates/birthday-bound-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the translation catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable i18n helpers.
// Dependencies: birthday-bound-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the public i18n surface:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](birthday_bound_cli::t) macro formats placeholders correctly.

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

use birthday_bound_cli::i18n::MessageArg;
use birthday_bound_cli::i18n::translate;
use birthday_bound_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("space", "365");
    assert_eq!(arg.key, "space");
    assert_eq!(arg.value, "365");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![
        MessageArg::new("target", "0.5"),
        MessageArg::new("space", "365"),
        MessageArg::new("threshold", "23"),
    ];
    let result = translate("threshold.result", args);
    assert_eq!(result, "Items needed for a 0.5 collision probability in a space of 365: 23");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    let result = translate("missing.key", Vec::new());
    assert_eq!(result, "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_message() {
    let rendered = t!("main.version", version = "0.1.0");
    assert_eq!(rendered, "birthday-bound 0.1.0");
}

/// Confirms non-string arguments are rendered through `Display`.
#[test]
fn t_macro_accepts_display_values() {
    let rendered = t!("curve.half_point", items = 77_163_u64);
    assert!(rendered.ends_with("77163"));
}
