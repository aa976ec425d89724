//! Diagnostic tracing for the analyzer.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. They are
//! separate from the failure report, which goes to the chosen sink. The
//! `--log-sink` report option emits failures as `warn` events through the
//! same subscriber.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=analyzer=debug analyzer analyze agent_data.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
