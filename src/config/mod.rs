//! Command-line parsing and validation helpers.

mod validation;

use clap::Parser;
use std::path::PathBuf;

/// CLI options for the Vocalc TUI and its one-shot modes.
#[derive(Debug, Parser, Clone)]
#[command(name = "vocalc", about = "Vocalc — voice-command calculator", author, version)]
pub struct AppConfig {
    /// Feed one utterance through the speech pipeline, print the resulting
    /// screen text, and exit
    #[arg(long, value_name = "TEXT")]
    pub utterance: Option<String>,

    /// Extra substitution rules (YAML sequence of pattern/replacement pairs)
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Print the active substitution rules in application order and exit
    #[arg(long = "list-rules", default_value_t = false)]
    pub list_rules: bool,

    /// Enable JSON trace logging to a file
    #[arg(long = "logs", env = "VOCALC_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "VOCALC_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// UI event poll interval (milliseconds)
    #[arg(long = "tick-ms", default_value_t = 100)]
    pub tick_ms: u64,
}

impl AppConfig {
    /// Whether the trace log should be written at all.
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}
