//! Tracing bootstrap for Libris binaries.
//!
//! Log output always goes to stderr: stdout carries the console transcript.

use anyhow::Context;
use libris_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber described by `settings`.
///
/// `RUST_LOG` takes precedence over `settings.log_level`. Calling this more
/// than once keeps the first subscriber and returns `Ok`.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = build_filter(settings)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!(
            target: "libris-telemetry",
            "global subscriber already installed; keeping the existing one"
        );
    }

    tracing::debug!(
        target: "libris-telemetry",
        level = %settings.log_level,
        format = ?settings.log_format,
        "telemetry initialized"
    );

    Ok(())
}

fn build_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&settings.log_level)
        .with_context(|| format!("invalid log level directive '{}'", settings.log_level))
}
