//! Log through a `tracing` event.

use anyhow::Result;

pub fn execute(message: &str) -> Result<()> {
    // Installs the tracing bridge.
    cmdlog_core::logger();

    tracing::info!(command = "trace-demo", "{}", message);
    Ok(())
}
