//! Logging bootstrap.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use veriguard_types::LogFormat;

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Levels come from `RUST_LOG` (default `info`). Safe to call more than
/// once; only the first call has an effect.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(env_filter);
        // A subscriber installed elsewhere (e.g., by a test harness) wins.
        let _ = match format {
            LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
            LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        };
    });
}
