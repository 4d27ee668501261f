// crates/birthday-bound-config/src/lib.rs
// ============================================================================
// Module: Birthday Bound Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for birthday-bound.toml semantics.
// Dependencies: birthday-bound-core, serde, toml
// ============================================================================

//! ## Overview
//! `birthday-bound-config` defines the configuration model for the
//! `birthday-bound` tool: analysis defaults, simulation parameters, event log
//! sinks, and named scenarios. Parsing is strict and validation fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
