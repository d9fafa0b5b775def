//! Log messages inside a sub-command.

use anyhow::Result;

pub fn execute(tag: &str, messages: &[String]) -> Result<()> {
    let logger = cmdlog_core::logger();

    cmdlog_core::begin_sub_command_logging(tag);
    for message in messages {
        logger.info(message);
    }
    cmdlog_core::end_sub_command_logging();

    logger.info(format_args!("{tag} finished"));
    Ok(())
}
