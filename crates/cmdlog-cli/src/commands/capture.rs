//! Capture logged output and print it.

use anyhow::Result;

pub fn execute(message: &str) -> Result<()> {
    let logger = cmdlog_core::logger();

    let captured = cmdlog_core::capture_output(|| logger.info(message));
    print!("{captured}");

    // Output is back on stderr once the capture ends.
    logger.info("capture finished");
    Ok(())
}
