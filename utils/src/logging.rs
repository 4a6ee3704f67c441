//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output for terminals.
    Human,
    /// Machine-parseable JSON, one object per line.
    Json,
}

/// Initialize the tracing subscriber for a long-running process.
///
/// Respects the `RUST_LOG` environment variable for filtering. Panics if
/// a global subscriber is already set; call it once at startup.
pub fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match format {
        LogFormat::Human => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Initialize tracing for a test binary.
///
/// Safe to call from every test: the first call wins and later calls are
/// ignored, so individual tests don't race over the global subscriber.
/// Set `RUST_LOG=canopy_topology=trace` to see selection decisions while
/// debugging a failing test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
