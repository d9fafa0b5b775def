//! Cloneable logger handle.

use cmdlog_types::Level;
use std::fmt;
use std::sync::Arc;

use crate::logging::Logging;
use crate::record::{Fields, LogRecord};

/// A handle to a [`Logging`] service, optionally carrying default fields.
///
/// Clones and handles derived with [`Logger::with_field`] share the service,
/// so a level, output, or formatter change is seen through all of them.
#[derive(Clone)]
pub struct Logger {
    logging: Arc<Logging>,
    fields: Fields,
}

impl Logger {
    pub(crate) fn new(logging: Arc<Logging>) -> Self {
        Self {
            logging,
            fields: Fields::new(),
        }
    }

    /// The service this handle writes through.
    pub fn logging(&self) -> &Arc<Logging> {
        &self.logging
    }

    /// Fields attached to every record from this handle.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Derive a handle that also attaches `key`.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Logger {
        let mut logger = self.clone();
        logger.fields.insert(key.into(), value.into());
        logger
    }

    /// Derive a handle that also attaches every entry of `fields`.
    pub fn with_fields(&self, fields: Fields) -> Logger {
        let mut logger = self.clone();
        logger.fields.extend(fields);
        logger
    }

    /// Log `message` at `level`.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.logging.enabled(level) {
            return;
        }
        let record = LogRecord::new(level, message.to_string()).with_fields(self.fields.clone());
        self.logging.emit(&record);
    }

    /// Log at [`Level::Trace`].
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }

    /// Log at [`Level::Debug`].
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    /// Log at [`Level::Info`].
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    /// Log at [`Level::Warning`].
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    /// Log at [`Level::Error`].
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Log at [`Level::Fatal`], then exit the process with status 1.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(Level::Fatal, message);
        std::process::exit(1)
    }

    /// Log at [`Level::Panic`], then panic with the same message.
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.log(Level::Panic, &message);
        panic!("{message}")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("logging", &self.logging)
            .field("fields", &self.fields)
            .finish()
    }
}
