// crates/birthday-bound-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for birthday-bound-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use birthday_bound_config::BirthdayBoundConfig;
use birthday_bound_config::ConfigError;

/// Result type shared by config tests.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into a `BirthdayBoundConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<BirthdayBoundConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<BirthdayBoundConfig, toml::de::Error> {
    config_from_toml("")
}

/// Assert that a validation result is an error containing a specific substring.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
