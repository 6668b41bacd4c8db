//! Logging bootstrap.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `info` or
/// `foco_core=debug`) is used.
pub fn init_logger(default_directive: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| format!("Invalid log filter '{}': {}", default_directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
