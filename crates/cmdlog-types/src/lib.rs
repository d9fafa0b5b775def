//! # cmdlog Types
//!
//! Vocabulary shared across the cmdlog crates.
//!
//! This crate provides:
//!
//! - [`Level`], the ordered severity of a log record
//! - [`LogFormat`], the selected output encoding
//! - [`LoggingConfig`], the settings a logging service is built from
//! - [`LogError`] and the [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use cmdlog_types::{Level, LogFormat};
//!
//! let level: Level = "warn".parse().unwrap();
//! assert_eq!(level, Level::Warning);
//! assert!(Level::Error > Level::Info);
//!
//! assert_eq!(LogFormat::from_value("json"), LogFormat::Json);
//! assert_eq!(LogFormat::from_value("JSON"), LogFormat::Text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enums;
pub mod errors;

// Re-export common types for convenience
pub use config::{LoggingConfig, DEFAULT_TIMESTAMP_LAYOUT};
pub use enums::{Level, LogFormat, LOG_FORMAT_ENV};
pub use errors::{LogError, Result};
