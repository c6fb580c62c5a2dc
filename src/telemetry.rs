//! Optional local telemetry logging used for debugging without corrupting the TUI.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Path of the JSON trace log, overridable via `AIVORY_TRACE_LOG`.
pub fn trace_log_path() -> PathBuf {
    env::var("AIVORY_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("aivory_trace.jsonl"))
}

#[inline]
fn tracing_enabled(logs: bool, no_logs: bool) -> bool {
    logs && !no_logs
}

fn init_tracing_once(logs: bool, no_logs: bool, once: &OnceLock<()>) {
    if !tracing_enabled(logs, no_logs) {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = trace_log_path();
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

/// Install the file subscriber when logging flags enable it. Safe to call
/// more than once; only the first enabled call installs.
pub fn init_tracing(logs: bool, no_logs: bool) {
    init_tracing_once(logs, no_logs, &TRACING_INIT);
}
