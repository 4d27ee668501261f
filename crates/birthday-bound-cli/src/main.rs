// crates/birthday-bound-cli/src/main.rs
// ============================================================================
// Module: Birthday Bound CLI Entry Point
// Description: Command dispatcher for collision-probability workflows.
// Purpose: Provide a localized CLI over the estimators, solver, and scenarios.
// Dependencies: clap, birthday-bound-core, birthday-bound-config, serde, thiserror.
// ============================================================================

//! ## Overview
//! The `birthday-bound` CLI answers birthday-paradox questions for identifier
//! spaces: collision probability, item thresholds, Monte Carlo checks, and
//! production scenario assessments. All user-facing strings are routed through
//! the i18n catalog. JSON output is canonical (RFC 8785).

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use birthday_bound_cli::i18n::Locale;
use birthday_bound_cli::i18n::set_locale;
use birthday_bound_cli::t;
use birthday_bound_cli::telemetry::CommandEvent;
use birthday_bound_cli::telemetry::CommandOutcome;
use birthday_bound_cli::telemetry::EventSink;
use birthday_bound_cli::telemetry::FileEventSink;
use birthday_bound_cli::telemetry::NoopEventSink;
use birthday_bound_cli::telemetry::StderrEventSink;
use birthday_bound_config::BirthdayBoundConfig;
use birthday_bound_config::LogSinkKind;
use birthday_bound_config::LoggingConfig;
use birthday_bound_config::MAX_SIMULATION_TRIALS;
use birthday_bound_config::config_toml_example;
use birthday_bound_core::IdentifierSystem;
use birthday_bound_core::RiskStatus;
use birthday_bound_core::SimulationConfig;
use birthday_bound_core::SpaceSize;
use birthday_bound_core::collision_curve;
use birthday_bound_core::collision_probability;
use birthday_bound_core::default_rates;
use birthday_bound_core::exact_collision_probability;
use birthday_bound_core::find_collision_threshold;
use birthday_bound_core::quick_reference;
use birthday_bound_core::simulate_collisions;
use birthday_bound_core::threshold::DEFAULT_TARGET_PROBABILITY;
use birthday_bound_core::time_to_collision_series;
use birthday_bound_core::validate_threshold;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use num_bigint::BigUint;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for selecting the CLI language.
const LANG_ENV: &str = "BIRTHDAY_BOUND_LANG";
/// Largest bit width accepted by `--bits`.
const MAX_SPACE_BITS: i64 = 4096;
/// Largest item count accepted by the exact estimator.
const MAX_EXACT_ITEMS: u64 = 10_000_000;
/// Largest per-trial item count accepted by the simulator.
const MAX_SIMULATION_ITEMS: u64 = 10_000_000;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "birthday-bound", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `BIRTHDAY_BOUND_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Config file path (defaults to birthday-bound.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Append command events to this file (overrides `[logging]`).
    #[arg(long, value_name = "PATH", global = true)]
    event_log: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the probability of at least one collision.
    Probability(ProbabilityCommand),
    /// Find how many items reach a target collision probability.
    Threshold(ThresholdCommand),
    /// Estimate collision probability with a Monte Carlo simulation.
    Simulate(SimulateCommand),
    /// Check a solved threshold against simulation.
    ValidateThreshold(ValidateThresholdCommand),
    /// Assess configured (or reference) production scenarios.
    Scenarios(ScenariosCommand),
    /// Print 50% collision points for common identifier systems.
    Reference,
    /// Sample the collision probability on a log scale.
    Curve(CurveCommand),
    /// Years until a 50% collision at given generation rates.
    TimeToCollision(TimeToCollisionCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

impl Commands {
    /// Stable label used in command events.
    const fn label(&self) -> &'static str {
        match self {
            Self::Probability(_) => "probability",
            Self::Threshold(_) => "threshold",
            Self::Simulate(_) => "simulate",
            Self::ValidateThreshold(_) => "validate-threshold",
            Self::Scenarios(_) => "scenarios",
            Self::Reference => "reference",
            Self::Curve(_) => "curve",
            Self::TimeToCollision(_) => "time-to-collision",
            Self::Config {
                command: ConfigCommand::Validate,
            } => "config validate",
            Self::Config {
                command: ConfigCommand::Example,
            } => "config example",
        }
    }
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the config file.
    Validate,
    /// Print a canonical example config.
    Example,
}

/// Space selection shared by commands; exactly one source is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SpaceArgs {
    /// Space size as a decimal integer.
    #[arg(long, value_name = "INT")]
    space: Option<SpaceSize>,
    /// Space size as a power of two.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0 ..= MAX_SPACE_BITS))]
    bits: Option<u32>,
    /// Named identifier system (int32, int64, uuid_v4, sha256).
    #[arg(long, value_name = "SYSTEM")]
    system: Option<IdentifierSystem>,
}

impl SpaceArgs {
    /// Resolves the selected space.
    fn resolve(&self) -> CliResult<SpaceSize> {
        if let Some(space) = &self.space {
            return Ok(space.clone());
        }
        if let Some(bits) = self.bits {
            return Ok(SpaceSize::from_bits(bits));
        }
        if let Some(system) = self.system {
            return Ok(system.space_size());
        }
        Err(CliError::new(t!("space.missing")))
    }
}

/// Arguments for `probability`.
#[derive(Args, Debug)]
struct ProbabilityCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Number of items drawn.
    #[arg(long, value_name = "N")]
    items: BigUint,
    /// Use the exact product instead of the approximation.
    #[arg(long, action = ArgAction::SetTrue)]
    exact: bool,
}

/// Arguments for `threshold`.
#[derive(Args, Debug)]
struct ThresholdCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Target collision probability.
    #[arg(long, value_name = "P", default_value_t = DEFAULT_TARGET_PROBABILITY)]
    target: f64,
}

/// Simulation overrides shared by Monte Carlo commands.
#[derive(Args, Debug)]
struct SimulationArgs {
    /// Trials per simulation (overrides `[simulation].trials`).
    #[arg(long, value_name = "N")]
    trials: Option<u32>,
    /// Seed for reproducible runs (overrides `[simulation].seed`).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

impl SimulationArgs {
    /// Merges overrides onto the configured settings.
    ///
    /// `--trials` is held to the same ceiling as `[simulation].trials`.
    fn resolve(&self, config: &BirthdayBoundConfig) -> CliResult<SimulationConfig> {
        let base = config.simulation.to_simulation_config();
        if let Some(trials) = self.trials
            && trials > MAX_SIMULATION_TRIALS
        {
            return Err(CliError::new(t!(
                "simulate.trials_too_large",
                limit = MAX_SIMULATION_TRIALS,
                trials = trials
            )));
        }
        Ok(SimulationConfig {
            trials: self.trials.unwrap_or(base.trials),
            seed: self.seed.or(base.seed),
        })
    }
}

/// Arguments for `simulate`.
#[derive(Args, Debug)]
struct SimulateCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Items drawn per trial.
    #[arg(long, value_name = "N")]
    items: u64,
    /// Simulation overrides.
    #[command(flatten)]
    simulation: SimulationArgs,
}

/// Arguments for `validate-threshold`.
#[derive(Args, Debug)]
struct ValidateThresholdCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Target collision probability.
    #[arg(long, value_name = "P", default_value_t = DEFAULT_TARGET_PROBABILITY)]
    target: f64,
    /// Simulation overrides.
    #[command(flatten)]
    simulation: SimulationArgs,
}

/// Arguments for `scenarios`.
#[derive(Args, Debug)]
struct ScenariosCommand {
    /// Days ahead that count as "approaching" (overrides `[analysis]`).
    #[arg(long, value_name = "DAYS")]
    horizon_days: Option<f64>,
}

/// Arguments for `curve`.
#[derive(Args, Debug)]
struct CurveCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Number of log-spaced samples.
    #[arg(long, value_name = "N", default_value_t = birthday_bound_core::analysis::DEFAULT_CURVE_POINTS)]
    points: usize,
}

/// Arguments for `time-to-collision`.
#[derive(Args, Debug)]
struct TimeToCollisionCommand {
    /// Space selection.
    #[command(flatten)]
    space: SpaceArgs,
    /// Identifiers generated per second; repeatable. Defaults to 1..1e9.
    #[arg(long = "rate", value_name = "IDS_PER_SECOND")]
    rates: Vec<f64>,
}

/// Output formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Localized human-readable text.
    Text,
    /// Canonical JSON.
    Json,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Output Payloads
// ============================================================================

/// JSON payload for `probability`.
#[derive(Debug, Serialize)]
struct ProbabilityOutput {
    /// Items drawn, as a decimal string.
    items: String,
    /// Space size.
    space: SpaceSize,
    /// Estimator used.
    estimator: &'static str,
    /// Collision probability.
    probability: f64,
}

/// JSON payload for `threshold`.
#[derive(Debug, Serialize)]
struct ThresholdOutput {
    /// Space size.
    space: SpaceSize,
    /// Target probability.
    target: f64,
    /// Solved threshold, as a decimal string.
    threshold: String,
}

/// JSON payload for `simulate`.
#[derive(Debug, Serialize)]
struct SimulateOutput {
    /// Simulation report.
    #[serde(flatten)]
    report: birthday_bound_core::SimulationReport,
    /// Approximate probability for comparison.
    theoretical: f64,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments, runs one command, and records its event.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = if matches!(
        command,
        Commands::Config {
            command: ConfigCommand::Example
        }
    ) {
        BirthdayBoundConfig::default()
    } else {
        BirthdayBoundConfig::load(cli.config.as_deref())
            .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?
    };
    let sink = open_event_sink(&config.logging, cli.event_log.as_deref())?;

    let label = command.label();
    let started = Instant::now();
    let result = dispatch(command, &config, cli.format);
    let (outcome, error) = match &result {
        Ok(code) if *code == ExitCode::SUCCESS => (CommandOutcome::Success, None),
        Ok(_) => (CommandOutcome::Failure, None),
        Err(err) => (CommandOutcome::Failure, Some(err.to_string())),
    };
    sink.record(&CommandEvent::new(label, outcome, started.elapsed().as_millis(), error));
    result
}

/// Routes a parsed command to its handler.
fn dispatch(
    command: Commands,
    config: &BirthdayBoundConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    match command {
        Commands::Probability(command) => command_probability(&command, format),
        Commands::Threshold(command) => command_threshold(&command, format),
        Commands::Simulate(command) => command_simulate(&command, config, format),
        Commands::ValidateThreshold(command) => {
            command_validate_threshold(&command, config, format)
        }
        Commands::Scenarios(command) => command_scenarios(&command, config, format),
        Commands::Reference => command_reference(format),
        Commands::Curve(command) => command_curve(&command, format),
        Commands::TimeToCollision(command) => command_time_to_collision(&command, format),
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(&help).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Estimator Commands
// ============================================================================

/// Executes `probability`.
fn command_probability(command: &ProbabilityCommand, format: OutputFormat) -> CliResult<ExitCode> {
    let space = command.space.resolve()?;
    let (estimator, probability) = if command.exact {
        if command.items > BigUint::from(MAX_EXACT_ITEMS) {
            return Err(CliError::new(t!(
                "probability.exact_too_large",
                limit = MAX_EXACT_ITEMS,
                items = command.items
            )));
        }
        ("exact", exact_collision_probability(&command.items, &space))
    } else {
        ("approximate", collision_probability(&command.items, &space))
    };
    match format {
        OutputFormat::Json => write_json(&ProbabilityOutput {
            items: command.items.to_string(),
            space,
            estimator,
            probability,
        })?,
        OutputFormat::Text => {
            let probability = format_probability(probability);
            let line = if command.exact {
                t!("probability.exact", items = command.items, space = space, probability = probability)
            } else {
                t!(
                    "probability.approximate",
                    items = command.items,
                    space = space,
                    probability = probability
                )
            };
            write_line(&line)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `threshold`.
fn command_threshold(command: &ThresholdCommand, format: OutputFormat) -> CliResult<ExitCode> {
    let space = command.space.resolve()?;
    let threshold = find_collision_threshold(&space, command.target)
        .map_err(|err| CliError::new(t!("threshold.failed", error = err)))?;
    match format {
        OutputFormat::Json => write_json(&ThresholdOutput {
            space,
            target: command.target,
            threshold: threshold.to_string(),
        })?,
        OutputFormat::Text => write_line(&t!(
            "threshold.result",
            target = command.target,
            space = space,
            threshold = threshold
        ))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Simulation Commands
// ============================================================================

/// Executes `simulate`.
fn command_simulate(
    command: &SimulateCommand,
    config: &BirthdayBoundConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    if command.items > MAX_SIMULATION_ITEMS {
        return Err(CliError::new(t!(
            "simulate.items_too_large",
            limit = MAX_SIMULATION_ITEMS,
            items = command.items
        )));
    }
    let space = command.space.resolve()?;
    let settings = command.simulation.resolve(config)?;
    let report = simulate_collisions(command.items, &space, &settings)
        .map_err(|err| CliError::new(t!("simulate.failed", error = err)))?;
    let theoretical = collision_probability(&BigUint::from(command.items), &space);
    match format {
        OutputFormat::Json => write_json(&SimulateOutput {
            report,
            theoretical,
        })?,
        OutputFormat::Text => {
            write_line(&t!(
                "simulate.result",
                items = report.items,
                space = report.space,
                trials = report.trials,
                collisions = report.collisions
            ))?;
            write_line(&t!(
                "simulate.probability",
                simulated = format!("{:.4}", report.probability),
                error = format!("{:.4}", report.standard_error),
                theoretical = format!("{theoretical:.4}")
            ))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `validate-threshold`; fails when the check does not pass.
fn command_validate_threshold(
    command: &ValidateThresholdCommand,
    config: &BirthdayBoundConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let space = command.space.resolve()?;
    let settings = command.simulation.resolve(config)?;
    check_validation_size(&space, command.target)?;
    let validation = validate_threshold(&space, command.target, &settings)
        .map_err(|err| CliError::new(t!("validate.failed", error = err)))?;
    match format {
        OutputFormat::Json => write_json(&validation)?,
        OutputFormat::Text => {
            write_line(&t!(
                "validate.result",
                threshold = validation.threshold,
                target = validation.target,
                space = validation.space
            ))?;
            write_line(&t!(
                "validate.samples",
                below = format!("{:.4}", validation.below),
                at = format!("{:.4}", validation.at)
            ))?;
            if validation.passed {
                write_line(&t!("validate.passed"))?;
            } else {
                write_line(&t!("validate.not_passed"))?;
            }
        }
    }
    Ok(if validation.passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Rejects targets whose threshold exceeds the per-trial item limit.
fn check_validation_size(space: &SpaceSize, target: f64) -> CliResult<()> {
    let threshold = find_collision_threshold(space, target)
        .map_err(|err| CliError::new(t!("validate.failed", error = err)))?;
    if threshold > BigUint::from(MAX_SIMULATION_ITEMS) {
        return Err(CliError::new(t!(
            "validate.threshold_too_large",
            threshold = threshold,
            limit = MAX_SIMULATION_ITEMS
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Scenario Commands
// ============================================================================

/// Executes `scenarios`.
fn command_scenarios(
    command: &ScenariosCommand,
    config: &BirthdayBoundConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let horizon = resolve_horizon(command.horizon_days, config)?;
    let scenarios = config
        .scenarios()
        .map_err(|err| CliError::new(t!("scenarios.failed", error = err)))?;
    let assessments = scenarios
        .iter()
        .map(|scenario| scenario.assess(horizon))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| CliError::new(t!("scenarios.failed", error = err)))?;
    if format == OutputFormat::Json {
        write_json(&assessments)?;
        return Ok(ExitCode::SUCCESS);
    }
    write_line(&t!("scenarios.header"))?;
    for assessment in &assessments {
        write_line("")?;
        write_line(&assessment.name)?;
        write_line(&t!("scenarios.system", system = assessment.system.description()))?;
        write_line(&t!("scenarios.items", items = assessment.current_items))?;
        write_line(&t!("scenarios.growth", rate = assessment.growth_rate))?;
        write_line(&t!("scenarios.risk", risk = format!("{:.2e}", assessment.current_risk)))?;
        let status = match assessment.status {
            RiskStatus::Exceeded => t!("scenarios.status.exceeded"),
            RiskStatus::Approaching {
                days,
            } => t!("scenarios.status.approaching", days = format!("{days:.0}")),
            RiskStatus::Safe => t!("scenarios.status.safe", horizon = horizon),
        };
        write_line(&status)?;
        let safety = assessment.safety_factor.map_or_else(
            || t!("scenarios.safety.unavailable"),
            |factor| t!("scenarios.safety", factor = format!("{factor:.1}")),
        );
        write_line(&safety)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Picks the horizon from the flag or the config and checks it.
fn resolve_horizon(flag: Option<f64>, config: &BirthdayBoundConfig) -> CliResult<f64> {
    let horizon = flag.unwrap_or(config.analysis.horizon_days);
    if horizon.is_finite() && horizon > 0.0 {
        Ok(horizon)
    } else {
        Err(CliError::new(t!("scenarios.horizon_invalid", value = horizon)))
    }
}

// ============================================================================
// SECTION: Analysis Commands
// ============================================================================

/// Executes `reference`.
fn command_reference(format: OutputFormat) -> CliResult<ExitCode> {
    let table =
        quick_reference().map_err(|err| CliError::new(t!("reference.failed", error = err)))?;
    if format == OutputFormat::Json {
        write_json(&table)?;
        return Ok(ExitCode::SUCCESS);
    }
    write_line(&t!("reference.header"))?;
    for row in &table {
        write_line(&t!(
            "reference.entry",
            system = row.system.description(),
            bits = row.bits,
            items = group_digits(&row.half_point.to_string())
        ))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `curve`.
fn command_curve(command: &CurveCommand, format: OutputFormat) -> CliResult<ExitCode> {
    let space = command.space.resolve()?;
    let curve = collision_curve(&space, command.points)
        .map_err(|err| CliError::new(t!("curve.failed", error = err)))?;
    if format == OutputFormat::Json {
        write_json(&curve)?;
        return Ok(ExitCode::SUCCESS);
    }
    write_line(&t!("curve.header", space = curve.space))?;
    for point in &curve.points {
        write_line(&t!(
            "curve.entry",
            items = point.items,
            probability = format_probability(point.probability)
        ))?;
    }
    if let Some(half) = curve.half_point {
        write_line(&t!("curve.half_point", items = half))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `time-to-collision`.
fn command_time_to_collision(
    command: &TimeToCollisionCommand,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let space = command.space.resolve()?;
    let rates = if command.rates.is_empty() { default_rates() } else { command.rates.clone() };
    let series = time_to_collision_series(&space, &rates)
        .map_err(|err| CliError::new(t!("time.failed", error = err)))?;
    if format == OutputFormat::Json {
        write_json(&series)?;
        return Ok(ExitCode::SUCCESS);
    }
    write_line(&t!("time.header", space = space))?;
    for entry in &series {
        write_line(&t!(
            "time.entry",
            rate = format!("{:.3e}", entry.ids_per_second),
            years = format!("{:.3e}", entry.years)
        ))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes config subcommands; `validate` succeeds once loading did.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => write_line(&t!("config.validate.ok"))?,
        ConfigCommand::Example => {
            let example = config_toml_example();
            write_line(example.trim_end())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Event Sinks
// ============================================================================

/// Opens the event sink selected by `--event-log` or `[logging]`.
fn open_event_sink(
    logging: &LoggingConfig,
    event_log: Option<&Path>,
) -> CliResult<Box<dyn EventSink>> {
    if let Some(path) = event_log {
        return open_file_sink(path);
    }
    match (logging.sink, logging.path.as_deref()) {
        (LogSinkKind::File, Some(path)) => open_file_sink(Path::new(path.trim())),
        (LogSinkKind::Stderr, _) => Ok(Box::new(StderrEventSink)),
        _ => Ok(Box::new(NoopEventSink)),
    }
}

/// Opens an append-only file sink.
fn open_file_sink(path: &Path) -> CliResult<Box<dyn EventSink>> {
    let sink = FileEventSink::new(path).map_err(|err| {
        CliError::new(t!("events.open_failed", path = path.display(), error = err))
    })?;
    Ok(Box::new(sink))
}

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Resolves the CLI locale from the flag or the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats a probability for display: fixed for ordinary values, scientific
/// for tiny ones.
fn format_probability(probability: f64) -> String {
    if probability <= 0.0 || probability >= 1e-4 {
        format!("{probability:.6}")
    } else {
        format!("{probability:.3e}")
    }
}

/// Inserts thousands separators into a decimal digit string.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stdout, mapping failures to a CLI error.
fn write_line(message: &str) -> CliResult<()> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a value to stdout as canonical JSON.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    bytes.push(b'\n');
    std::io::stdout()
        .write_all(&bytes)
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
