//! Error types for cmdlog operations.

use thiserror::Error;

/// The error type for cmdlog operations.
///
/// Only level parsing can fail. Formatting is infallible, and initialization
/// problems are reported as warning records instead of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A level name that does not match any [`Level`](crate::Level)
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),
}

/// A specialized Result type for cmdlog operations.
pub type Result<T> = std::result::Result<T, LogError>;
