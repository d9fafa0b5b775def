//! Process-wide logger.
//!
//! The first call to [`logger`] builds the shared [`Logging`] service from
//! [`LoggingConfig::from_env`] and installs its tracing bridge as the global
//! default subscriber. Every later call returns the same handle; only the
//! level, output, and formatter behind it ever change.

use cmdlog_types::{Level, LogFormat, LoggingConfig, Result};
use once_cell::sync::OnceCell;
use std::io::Write;
use std::sync::Arc;

use crate::format::Format;
use crate::logger::Logger;
use crate::logging::{Logging, SubCommandScope};

static SHARED: OnceCell<Logger> = OnceCell::new();

/// The shared logger, initialized on first use.
///
/// If the tracing bridge cannot be installed because another global
/// subscriber is already set, a warning is logged and the handle is still
/// returned.
pub fn logger() -> &'static Logger {
    SHARED.get_or_init(initialize)
}

fn initialize() -> Logger {
    let logging = Arc::new(Logging::new(&LoggingConfig::from_env()));
    let logger = logging.logger();
    if let Err(err) = tracing::subscriber::set_global_default(logging.subscriber()) {
        logger.warn(format_args!("error initializing logger: {err}"));
    }
    logger
}

fn logging() -> &'static Logging {
    logger().logging()
}

/// Set the shared minimum level from its name.
pub fn set_level(name: &str) -> Result<()> {
    logging().set_level(name)
}

/// The shared minimum level.
pub fn level() -> Level {
    logging().level()
}

/// Names of every valid level, most severe first.
pub fn get_levels() -> Vec<String> {
    Level::ALL.iter().map(|level| level.to_string()).collect()
}

/// Redirect all later shared output to `sink`.
///
/// The sink must not log through the shared logger itself.
pub fn set_output<W>(sink: W)
where
    W: Write + Send + 'static,
{
    logging().set_output(sink);
}

/// Run `action`, returning everything it logged through the shared logger.
///
/// Output goes back to stderr afterwards, also when `action` panics.
pub fn capture_output<F>(action: F) -> String
where
    F: FnOnce(),
{
    logging().capture_output(action)
}

/// Install `formatter` on the shared logger.
pub fn set_formatter<F>(formatter: F)
where
    F: Format + 'static,
{
    logging().set_formatter(formatter);
}

/// Switch the shared logger to the stock formatter for `format`.
pub fn set_format(format: LogFormat) {
    logging().set_format(format);
}

/// Tag shared text output with `sub_command` until [`end_sub_command_logging`].
pub fn begin_sub_command_logging(sub_command: &str) {
    logging().begin_sub_command(sub_command);
}

/// Remove the sub-command tag from shared text output.
pub fn end_sub_command_logging() {
    logging().end_sub_command();
}

/// Tag shared text output with `sub_command` until the scope is dropped.
pub fn sub_command_logging(sub_command: &str) -> SubCommandScope<'static> {
    logging().sub_command(sub_command)
}
