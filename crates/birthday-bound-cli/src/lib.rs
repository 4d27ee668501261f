// crates/birthday-bound-cli/src/lib.rs
// ============================================================================
// Module: Birthday Bound CLI Library
// Description: Shared helpers for the birthday-bound command line tool.
// Purpose: Expose the message catalog and event sinks to the binary and tests.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The `birthday-bound` binary keeps its user-facing strings in [`i18n`] and
//! records one structured event per command through [`telemetry`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod telemetry;
