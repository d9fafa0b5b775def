//! List valid log levels.

use anyhow::Result;

pub fn execute() -> Result<()> {
    for level in cmdlog_core::get_levels() {
        println!("{level}");
    }
    Ok(())
}
