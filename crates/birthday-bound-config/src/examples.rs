// crates/birthday-bound-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and `config example`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for `birthday-bound.toml`. The output is static and
//! must always pass [`crate::BirthdayBoundConfig::validate`].

/// Returns a canonical example `birthday-bound.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[analysis]
acceptable_risk = 1e-6
horizon_days = 365.0

[simulation]
trials = 10000
# seed = 42

[logging]
sink = "file"
path = "birthday-bound-events.jsonl"

[[scenarios]]
name = "Orders (64-bit IDs)"
system = "int64"
current_items = 25000000
growth_rate = 250000.0

[[scenarios]]
name = "Session tokens (UUID v4)"
system = "uuid_v4"
current_items = 5000000000
growth_rate = 40000000.0
acceptable_risk = 1e-12
"#,
    )
}
