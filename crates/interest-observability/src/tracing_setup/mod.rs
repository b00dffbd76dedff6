//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `INTEREST_LOG=interest_selection=debug`.
pub const LOG_ENV_VAR: &str = "INTEREST_LOG";

static INIT: Once = Once::new();

/// Subscriber output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Install the global subscriber, filtered by [`LOG_ENV_VAR`] (default `info`).
///
/// Idempotent: only the first call in a process has an effect.
pub fn init_tracing(format: TracingFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, format);
}

/// Install the global subscriber with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str, format: TracingFormat) {
    install(EnvFilter::new(filter), format);
}

fn install(filter: EnvFilter, format: TracingFormat) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);
        // A subscriber installed elsewhere (e.g. by the host application) wins.
        let _ = match format {
            TracingFormat::Pretty => builder.try_init(),
            TracingFormat::Json => builder
                .with_file(true)
                .with_line_number(true)
                .json()
                .try_init(),
        };
    });
}
