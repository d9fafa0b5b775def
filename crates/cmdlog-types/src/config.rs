//! Configuration for a logging service.

use serde::{Deserialize, Serialize};
use crate::enums::{Level, LogFormat};

/// Default strftime layout for rendered timestamps.
pub const DEFAULT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings a logging service starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level that gets written
    #[serde(default)]
    pub level: Level,
    /// Output encoding
    #[serde(default)]
    pub format: LogFormat,
    /// Whether text lines carry a timestamp
    #[serde(default)]
    pub show_timestamp: bool,
    /// strftime layout used when timestamps are shown
    #[serde(default = "default_timestamp_layout")]
    pub timestamp_layout: String,
}

fn default_timestamp_layout() -> String {
    DEFAULT_TIMESTAMP_LAYOUT.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            format: LogFormat::default(),
            show_timestamp: false,
            timestamp_layout: default_timestamp_layout(),
        }
    }
}

impl LoggingConfig {
    /// Defaults, with the format taken from `LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self {
            format: LogFormat::from_env(),
            ..Self::default()
        }
    }
}
