//! Common enumerations used throughout cmdlog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Environment variable that selects the output encoding.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Severity of a log record.
///
/// Variants are ordered by severity, so `Level::Debug < Level::Info` and a
/// record passes the filter when its level is at least the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// Informational messages
    #[default]
    Info,
    /// Something unexpected that does not stop the operation
    #[serde(alias = "warn")]
    Warning,
    /// An operation failed
    Error,
    /// The process is about to exit
    Fatal,
    /// The process is about to panic
    Panic,
}

impl Level {
    /// Every level, from most to least severe.
    pub const ALL: [Level; 7] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warning),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

/// Output encoding for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colorized, human-readable lines
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// Interpret a `LOG_FORMAT` value. Only the exact string `json` selects JSON.
    pub fn from_value(value: &str) -> Self {
        if value == "json" {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// Read the format from the `LOG_FORMAT` environment variable.
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!(
            "bogus".parse::<Level>(),
            Err(LogError::InvalidLevel("bogus".to_string()))
        );
    }

    #[test]
    fn test_all_levels_are_distinct() {
        let names: HashSet<_> = Level::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names.len(), Level::ALL.len());
        assert_eq!(Level::ALL[0], Level::Panic);
        assert_eq!(Level::ALL[6], Level::Trace);
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(Level::from(tracing::Level::WARN), Level::Warning);
        assert_eq!(Level::from(tracing::Level::ERROR), Level::Error);
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Trace);
    }

    #[test]
    fn test_log_format_value() {
        assert_eq!(LogFormat::from_value("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_value("text"), LogFormat::Text);
        assert_eq!(LogFormat::from_value(" json"), LogFormat::Text);
        assert_eq!(LogFormat::from_value(""), LogFormat::Text);
    }

    proptest! {
        #[test]
        fn unknown_names_are_rejected_verbatim(name in "[a-z]{1,12}") {
            prop_assume!(!["panic", "fatal", "error", "warn", "warning", "info", "debug", "trace"]
                .contains(&name.as_str()));
            prop_assert_eq!(name.parse::<Level>(), Err(LogError::InvalidLevel(name.clone())));
        }
    }
}
