//! A single log record.

use chrono::{DateTime, Local};
use cmdlog_types::Level;
use std::collections::BTreeMap;

/// Structured key/value data attached to a record.
pub type Fields = BTreeMap<String, serde_json::Value>;

/// One message at one level, as handed to a [`Format`](crate::format::Format).
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity of the record
    pub level: Level,
    /// When the record was created
    pub time: DateTime<Local>,
    /// Message text, possibly spanning several lines
    pub message: String,
    /// Extra data; only structured output renders it
    pub fields: Fields,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            time: Local::now(),
            message: message.into(),
            fields: Fields::new(),
        }
    }

    /// Replace the timestamp.
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    /// Replace the attached fields.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
