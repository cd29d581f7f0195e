//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured `log_level`. Production emits JSON
/// lines; every other environment gets human-readable output.
pub fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    }
}
