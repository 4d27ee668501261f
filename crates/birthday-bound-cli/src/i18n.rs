// crates/birthday-bound-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings and support additional locales.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The `birthday-bound` CLI stores user-facing strings in a small translation
//! catalog. All runtime output should be routed through the
//! [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"space"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "birthday-bound {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to serialize output: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config is valid."),
    ("events.open_failed", "Failed to open event log at {path}: {error}"),
    ("space.missing", "Provide one of --space, --bits, or --system."),
    (
        "probability.approximate",
        "Approximate collision probability for {items} items in a space of {space}: {probability}",
    ),
    (
        "probability.exact",
        "Exact collision probability for {items} items in a space of {space}: {probability}",
    ),
    (
        "probability.exact_too_large",
        "The exact estimator is limited to {limit} items; got {items}.",
    ),
    (
        "threshold.result",
        "Items needed for a {target} collision probability in a space of {space}: {threshold}",
    ),
    ("threshold.failed", "Failed to solve the threshold: {error}"),
    (
        "simulate.result",
        "Simulated {items} items in a space of {space} over {trials} trials: {collisions} \
         collisions",
    ),
    (
        "simulate.probability",
        "Simulated: {simulated} (standard error {error}), theoretical: {theoretical}",
    ),
    ("simulate.items_too_large", "Simulation is limited to {limit} items per trial; got {items}."),
    ("simulate.trials_too_large", "Simulation is limited to {limit} trials; got {trials}."),
    ("simulate.failed", "Simulation failed: {error}"),
    ("validate.result", "Threshold {threshold} for target {target} in a space of {space}"),
    ("validate.samples", "Simulated probability one below: {below}; at threshold: {at}"),
    ("validate.passed", "Threshold validation passed."),
    ("validate.not_passed", "Threshold validation failed."),
    (
        "validate.threshold_too_large",
        "Threshold {threshold} exceeds the simulation limit of {limit} items per trial.",
    ),
    ("validate.failed", "Threshold validation could not run: {error}"),
    ("scenarios.header", "Production system collision analysis"),
    ("scenarios.system", "  System: {system}"),
    ("scenarios.items", "  Current items: {items}"),
    ("scenarios.growth", "  Growth: {rate}/day"),
    ("scenarios.risk", "  Collision risk: {risk}"),
    ("scenarios.status.exceeded", "  RISK EXCEEDED: immediate action needed"),
    ("scenarios.status.approaching", "  Time to threshold: {days} days"),
    ("scenarios.status.safe", "  Safe beyond {horizon} days at current growth"),
    ("scenarios.safety", "  Safety factor: {factor}x before 50% collision"),
    ("scenarios.safety.unavailable", "  Safety factor: not available"),
    ("scenarios.horizon_invalid", "Horizon must be a positive number of days; got {value}."),
    ("scenarios.failed", "Failed to assess scenarios: {error}"),
    ("reference.header", "Quick reference: 50% collision points"),
    ("reference.entry", "  {system} ({bits} bits): {items} items"),
    ("reference.failed", "Failed to build the quick reference: {error}"),
    ("curve.header", "Collision curve for a space of {space}"),
    ("curve.entry", "  {items}: {probability}"),
    ("curve.half_point", "  50% collision point: {items}"),
    ("curve.failed", "Failed to sample the collision curve: {error}"),
    ("time.header", "Years until a 50% collision for a space of {space}"),
    ("time.entry", "  {rate} IDs/s: {years} years"),
    ("time.failed", "Failed to compute time to collision: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "birthday-bound {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("output.json_failed", "No s'ha pogut serialitzar la sortida: {error}"),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("config.validate.ok", "La configuració és vàlida."),
    ("events.open_failed", "No s'ha pogut obrir el registre d'esdeveniments a {path}: {error}"),
    ("space.missing", "Indiqueu una de --space, --bits o --system."),
    (
        "probability.approximate",
        "Probabilitat aproximada de col·lisió per a {items} elements en un espai de {space}: \
         {probability}",
    ),
    (
        "probability.exact",
        "Probabilitat exacta de col·lisió per a {items} elements en un espai de {space}: \
         {probability}",
    ),
    (
        "probability.exact_too_large",
        "L'estimador exacte està limitat a {limit} elements; s'han rebut {items}.",
    ),
    (
        "threshold.result",
        "Elements necessaris per a una probabilitat de col·lisió de {target} en un espai de \
         {space}: {threshold}",
    ),
    ("threshold.failed", "No s'ha pogut resoldre el llindar: {error}"),
    (
        "simulate.result",
        "S'han simulat {items} elements en un espai de {space} amb {trials} proves: {collisions} \
         col·lisions",
    ),
    (
        "simulate.probability",
        "Simulada: {simulated} (error estàndard {error}), teòrica: {theoretical}",
    ),
    (
        "simulate.items_too_large",
        "La simulació està limitada a {limit} elements per prova; s'han rebut {items}.",
    ),
    (
        "simulate.trials_too_large",
        "La simulació està limitada a {limit} proves; s'han rebut {trials}.",
    ),
    ("simulate.failed", "La simulació ha fallat: {error}"),
    ("validate.result", "Llindar {threshold} per a l'objectiu {target} en un espai de {space}"),
    ("validate.samples", "Probabilitat simulada un per sota: {below}; al llindar: {at}"),
    ("validate.passed", "La validació del llindar ha estat correcta."),
    ("validate.not_passed", "La validació del llindar ha fallat."),
    (
        "validate.threshold_too_large",
        "El llindar {threshold} supera el límit de simulació de {limit} elements per prova.",
    ),
    ("validate.failed", "No s'ha pogut executar la validació del llindar: {error}"),
    ("scenarios.header", "Anàlisi de col·lisions de sistemes en producció"),
    ("scenarios.system", "  Sistema: {system}"),
    ("scenarios.items", "  Elements actuals: {items}"),
    ("scenarios.growth", "  Creixement: {rate}/dia"),
    ("scenarios.risk", "  Risc de col·lisió: {risk}"),
    ("scenarios.status.exceeded", "  RISC SUPERAT: cal actuar immediatament"),
    ("scenarios.status.approaching", "  Temps fins al llindar: {days} dies"),
    ("scenarios.status.safe", "  Segur més enllà de {horizon} dies al creixement actual"),
    ("scenarios.safety", "  Factor de seguretat: {factor}x abans d'un 50% de col·lisió"),
    ("scenarios.safety.unavailable", "  Factor de seguretat: no disponible"),
    (
        "scenarios.horizon_invalid",
        "L'horitzó ha de ser un nombre positiu de dies; s'ha rebut {value}.",
    ),
    ("scenarios.failed", "No s'han pogut avaluar els escenaris: {error}"),
    ("reference.header", "Referència ràpida: punts de col·lisió del 50%"),
    ("reference.entry", "  {system} ({bits} bits): {items} elements"),
    ("reference.failed", "No s'ha pogut construir la referència ràpida: {error}"),
    ("curve.header", "Corba de col·lisió per a un espai de {space}"),
    ("curve.entry", "  {items}: {probability}"),
    ("curve.half_point", "  Punt de col·lisió del 50%: {items}"),
    ("curve.failed", "No s'ha pogut mostrejar la corba de col·lisió: {error}"),
    ("time.header", "Anys fins a un 50% de col·lisió per a un espai de {space}"),
    ("time.entry", "  {rate} ID/s: {years} anys"),
    ("time.failed", "No s'ha pogut calcular el temps fins a la col·lisió: {error}"),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

/// Returns the raw catalog entries for the requested locale.
#[cfg(test)]
pub(crate) const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Ca => CATALOG_CA,
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// Named arguments are substituted into `{placeholder}` positions of the
/// catalog template for `$key`.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
