//! Helpers for installing a global `tracing` subscriber.

use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

static INIT: Once = Once::new();

/// Builds a filter from an explicit `log_level`, falling back to `RUST_LOG` and then to
/// [`DEFAULT_LOG_LEVEL`].
pub fn get_log_env(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    }
}

/// Installs the global fmt subscriber once. Later calls are ignored.
pub fn init_global_logger(log_level: Option<&str>) {
    let filter = get_log_env(log_level);
    INIT.call_once(|| {
        let _ = Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init();
    });
}
