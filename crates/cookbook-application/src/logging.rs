//! Tracing setup.

use cookbook_core::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` overrides `default_filter`. Returns `false` when a global
/// subscriber was already installed, leaving that one in place.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs the global subscriber using the `[logging]` config table.
pub fn init_tracing_from_settings(settings: &LoggingSettings) -> bool {
    init_tracing(&settings.filter)
}
