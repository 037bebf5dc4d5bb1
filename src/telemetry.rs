//! Structured trace logging to a JSON lines file, opt-in via flags/env.

use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Where the trace log lands; overridable for tests and debugging.
pub fn tracing_log_path() -> PathBuf {
    env::var("VOCALC_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("vocalc_trace.jsonl"))
}

/// Install the global JSON subscriber once. A no-op unless logging is
/// enabled; failure to open the log file silently disables logging rather
/// than break the UI.
pub fn init_tracing(config: &AppConfig) {
    if !config.logging_enabled() {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
