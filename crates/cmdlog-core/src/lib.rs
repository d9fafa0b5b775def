//! # cmdlog Core
//!
//! A process-wide logging facade for command-line tools.
//!
//! This crate provides:
//!
//! - **Shared logger**: [`logger()`] hands out one lazily initialized [`Logger`]
//! - **Text output**: colorized severity tags plus an optional sub-command label
//! - **JSON output**: one object per record, selected with `LOG_FORMAT=json`
//! - **Level and sink control**: [`set_level`], [`set_output`], [`capture_output`]
//! - **Tracing bridge**: `tracing` events are written through the same service
//!
//! ## Example
//!
//! ```
//! use cmdlog_core as log;
//!
//! log::logger().info("fetching dependencies");
//!
//! let output = log::capture_output(|| {
//!     log::begin_sub_command_logging("build");
//!     log::logger().warn("cache miss");
//!     log::end_sub_command_logging();
//! });
//! assert!(output.contains("BUILD"));
//! assert!(log::set_level("bogus").is_err());
//! ```
//!
//! Sub-command boundaries and output swaps are not synchronized with threads
//! that are logging at the same moment. A record already reading the
//! configuration finishes with the formatter it picked up.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod global;
pub mod layer;
pub mod logger;
pub mod logging;
pub mod record;
pub mod term;

// Re-export commonly used items
pub use cmdlog_types::{Level, LogError, LogFormat, LoggingConfig, Result};
pub use format::{CustomTextFormat, Format, JsonFormat};
pub use global::{
    begin_sub_command_logging, capture_output, end_sub_command_logging, get_levels, level,
    logger, set_format, set_formatter, set_level, set_output, sub_command_logging,
};
pub use layer::{LoggingLayer, LoggingSubscriber};
pub use logger::Logger;
pub use logging::{Logging, SharedBuffer, SubCommandScope};
pub use record::{Fields, LogRecord};
