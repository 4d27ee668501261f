// crates/birthday-bound-cli/src/telemetry.rs
// ============================================================================
// Module: CLI Command Events
// Description: Structured JSON-lines events for executed commands.
// Purpose: Emit one machine-readable record per command without a framework.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every command run produces a [`CommandEvent`] that is handed to an
//! [`EventSink`]. Sinks write one JSON object per line and never fail the
//! command: a record that cannot be serialized or written is dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result classification for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The command finished and reported success.
    Success,
    /// The command returned an error or a failing verdict.
    Failure,
}

/// Command event payload.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Command label, e.g. `threshold` or `config validate`.
    pub command: &'static str,
    /// Command outcome.
    pub outcome: CommandOutcome,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u128,
    /// Error message when the command failed with one.
    pub error: Option<String>,
}

impl CommandEvent {
    /// Creates a new command event stamped with the current time.
    #[must_use]
    pub fn new(
        command: &'static str,
        outcome: CommandOutcome,
        duration_ms: u128,
        error: Option<String>,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "command_completed",
            timestamp_ms,
            command,
            outcome,
            duration_ms,
            error,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Destination for command events.
pub trait EventSink: Send + Sync {
    /// Record a command event.
    fn record(&self, event: &CommandEvent);
}

/// Event sink that logs JSON lines to stderr.
pub struct StderrEventSink;

impl EventSink for StderrEventSink {
    fn record(&self, event: &CommandEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Event sink that appends JSON lines to a file.
pub struct FileEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileEventSink {
    /// Opens the event log file in append mode, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventSink for FileEventSink {
    fn record(&self, event: &CommandEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op event sink.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: &CommandEvent) {}
}
