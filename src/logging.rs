//! Logging initialization

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// Respects `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
