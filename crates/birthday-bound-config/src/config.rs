// crates/birthday-bound-config/src/config.rs
// ============================================================================
// Module: Birthday Bound Configuration
// Description: Configuration loading and validation for birthday-bound.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: birthday-bound-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys are rejected. When no path is given and the default file does
//! not exist, built-in defaults apply; an explicitly requested file must
//! exist.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use birthday_bound_core::CollisionError;
use birthday_bound_core::CollisionScenario;
use birthday_bound_core::IdentifierSystem;
use birthday_bound_core::SimulationConfig;
use birthday_bound_core::production_scenarios;
use birthday_bound_core::scenario::DEFAULT_ACCEPTABLE_RISK;
use birthday_bound_core::scenario::DEFAULT_HORIZON_DAYS;
use birthday_bound_core::simulator::DEFAULT_TRIALS;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "birthday-bound.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "BIRTHDAY_BOUND_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of configured scenarios.
pub const MAX_SCENARIOS: usize = 256;
/// Maximum length of a scenario name.
pub(crate) const MAX_SCENARIO_NAME_LENGTH: usize = 256;
/// Maximum Monte Carlo trials per run.
pub const MAX_SIMULATION_TRIALS: u32 = 10_000_000;

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Root configuration for `birthday-bound`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BirthdayBoundConfig {
    /// Analysis defaults.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Monte Carlo settings.
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Command event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Named scenarios; empty means the built-in reference set.
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

impl BirthdayBoundConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order is `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory. Only the last,
    /// implicit location may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.simulation.validate()?;
        self.logging.validate()?;
        if self.scenarios.len() > MAX_SCENARIOS {
            return Err(ConfigError::Invalid(format!(
                "scenarios exceed max count of {MAX_SCENARIOS}"
            )));
        }
        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !names.insert(scenario.name.trim()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate scenario name: {}",
                    scenario.name.trim()
                )));
            }
        }
        Ok(())
    }

    /// Builds the scenarios to assess.
    ///
    /// Configured scenarios win; with none configured the built-in reference
    /// set is used. Scenarios without their own risk take
    /// `analysis.acceptable_risk`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a risk value is out of range.
    pub fn scenarios(&self) -> Result<Vec<CollisionScenario>, ConfigError> {
        let default_risk = self.analysis.acceptable_risk;
        if self.scenarios.is_empty() {
            return production_scenarios()
                .into_iter()
                .map(|scenario| scenario.with_acceptable_risk(default_risk).map_err(invalid))
                .collect();
        }
        self.scenarios.iter().map(|scenario| scenario.to_scenario(default_risk)).collect()
    }
}

// ============================================================================
// SECTION: Analysis
// ============================================================================

/// Defaults applied to risk analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Risk level that counts as "too high".
    #[serde(default = "default_acceptable_risk")]
    pub acceptable_risk: f64,
    /// Days ahead within which a scenario is flagged as approaching.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            acceptable_risk: default_acceptable_risk(),
            horizon_days: default_horizon_days(),
        }
    }
}

impl AnalysisConfig {
    /// Validates analysis defaults.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_probability("analysis.acceptable_risk", self.acceptable_risk)?;
        if !(self.horizon_days.is_finite() && self.horizon_days > 0.0) {
            return Err(ConfigError::Invalid(
                "analysis.horizon_days must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Simulation
// ============================================================================

/// Monte Carlo parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSettings {
    /// Trials per simulation.
    #[serde(default = "default_trials")]
    pub trials: u32,
    /// Fixed seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
        }
    }
}

impl SimulationSettings {
    /// Converts to the core simulation configuration.
    #[must_use]
    pub const fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            trials: self.trials,
            seed: self.seed,
        }
    }

    /// Validates simulation settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("simulation.trials must be positive".to_string()));
        }
        if self.trials > MAX_SIMULATION_TRIALS {
            return Err(ConfigError::Invalid(format!(
                "simulation.trials exceeds max of {MAX_SIMULATION_TRIALS}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Destination for command events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSinkKind {
    /// Events are discarded.
    #[default]
    None,
    /// Events are written to stderr as JSON lines.
    Stderr,
    /// Events are appended to `logging.path` as JSON lines.
    File,
}

/// Command event log settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Sink kind.
    #[serde(default)]
    pub sink: LogSinkKind,
    /// Log file path; required for the file sink only.
    #[serde(default)]
    pub path: Option<String>,
}

impl LoggingConfig {
    /// Validates logging settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, self.path.as_deref()) {
            (LogSinkKind::File, Some(path)) => validate_path_string("logging.path", path),
            (LogSinkKind::File, None) => {
                Err(ConfigError::Invalid("logging.path is required for the file sink".to_string()))
            }
            (_, Some(_)) => Err(ConfigError::Invalid(
                "logging.path is only allowed with the file sink".to_string(),
            )),
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// One named scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Display name; unique within the file.
    pub name: String,
    /// Identifier scheme.
    pub system: IdentifierSystem,
    /// Identifiers issued so far.
    pub current_items: u64,
    /// Identifiers issued per day.
    pub growth_rate: f64,
    /// Overrides `analysis.acceptable_risk`.
    #[serde(default)]
    pub acceptable_risk: Option<f64>,
}

impl ScenarioConfig {
    /// Builds the core scenario, falling back to `default_risk`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the effective risk is out of range.
    pub fn to_scenario(&self, default_risk: f64) -> Result<CollisionScenario, ConfigError> {
        CollisionScenario::new(
            self.name.trim(),
            self.system,
            self.current_items,
            self.growth_rate,
        )
        .with_acceptable_risk(self.acceptable_risk.unwrap_or(default_risk))
        .map_err(invalid)
    }

    /// Validates one scenario entry.
    fn validate(&self) -> Result<(), ConfigError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigError::Invalid("scenario name must be non-empty".to_string()));
        }
        if name.len() > MAX_SCENARIO_NAME_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "scenario name exceeds max length of {MAX_SCENARIO_NAME_LENGTH}"
            )));
        }
        if !(self.growth_rate.is_finite() && self.growth_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scenario {name}: growth_rate must be positive"
            )));
        }
        if let Some(risk) = self.acceptable_risk {
            validate_probability(&format!("scenario {name}: acceptable_risk"), risk)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path and whether it was requested explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a probability lies strictly inside `(0, 1)`.
fn validate_probability(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{field} must lie in (0, 1)")))
    }
}

/// Maps a core error into a config validation error.
fn invalid(err: CollisionError) -> ConfigError {
    ConfigError::Invalid(err.to_string())
}

/// Default acceptable risk.
const fn default_acceptable_risk() -> f64 {
    DEFAULT_ACCEPTABLE_RISK
}

/// Default horizon in days.
const fn default_horizon_days() -> f64 {
    DEFAULT_HORIZON_DAYS
}

/// Default trial count.
const fn default_trials() -> u32 {
    DEFAULT_TRIALS
}

// ============================================================================
// SECTION: Tests
// ============================================================================
