//! Record formatters.
//!
//! [`CustomTextFormat`] renders colorized, line-oriented text with an optional
//! sub-command tag. [`JsonFormat`] renders one JSON object per record.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat};
use cmdlog_types::{Level, LogFormat, DEFAULT_TIMESTAMP_LAYOUT};
use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::sync::Arc;

use crate::record::LogRecord;
use crate::term::{paint, Color};

/// Renders a [`LogRecord`] into bytes.
///
/// Formatting never fails. Output is appended to `buf`, which the caller may
/// reuse between records.
pub trait Format: Send + Sync {
    /// Append the rendered record to `buf`.
    fn format(&self, record: &LogRecord, buf: &mut Vec<u8>);
}

/// Build the formatter a [`LogFormat`] selects, with no sub-command tag.
pub fn formatter_for(format: LogFormat) -> Arc<dyn Format> {
    match format {
        LogFormat::Json => Arc::new(JsonFormat),
        LogFormat::Text => Arc::new(CustomTextFormat::new("")),
    }
}

/// Colorized text formatter.
///
/// Each line of the message becomes one output line:
///
/// ```text
/// <SEVERITY>: [<SUB-COMMAND> : ][<TIMESTAMP> - ]<line>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTextFormat {
    show_level: bool,
    show_timestamp: bool,
    sub_command: String,
    timestamp_layout: String,
}

impl CustomTextFormat {
    /// Formatter tagged with `sub_command` (empty for none), timestamps off.
    pub fn new(sub_command: impl Into<String>) -> Self {
        Self {
            show_level: true,
            show_timestamp: false,
            sub_command: sub_command.into(),
            timestamp_layout: DEFAULT_TIMESTAMP_LAYOUT.to_string(),
        }
    }

    /// Turn timestamps on, rendered with a strftime `layout`.
    ///
    /// A layout chrono cannot parse or cannot render (parse-only specifiers
    /// such as `%#z`) is replaced by [`DEFAULT_TIMESTAMP_LAYOUT`].
    pub fn with_timestamp(mut self, layout: impl Into<String>) -> Self {
        let layout = layout.into();
        self.show_timestamp = true;
        self.timestamp_layout = if renders(&layout) {
            layout
        } else {
            DEFAULT_TIMESTAMP_LAYOUT.to_string()
        };
        self
    }

    /// Whether the severity tag is written.
    pub fn show_level(&self) -> bool {
        self.show_level
    }

    /// Whether timestamps are written.
    pub fn show_timestamp(&self) -> bool {
        self.show_timestamp
    }

    /// Sub-command tag, empty when none is set.
    pub fn sub_command(&self) -> &str {
        &self.sub_command
    }

    /// strftime layout for timestamps.
    pub fn timestamp_layout(&self) -> &str {
        &self.timestamp_layout
    }
}

impl Default for CustomTextFormat {
    fn default() -> Self {
        Self::new("")
    }
}

/// Whether chrono can both parse and render `layout`.
fn renders(layout: &str) -> bool {
    if StrftimeItems::new(layout).any(|item| item == Item::Error) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", Local::now().format(layout)).is_ok()
}

/// Render `time` with `layout`, or with the default layout if rendering fails.
fn render_timestamp(time: &DateTime<Local>, layout: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(layout)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIMESTAMP_LAYOUT));
    }
    out
}

/// Colorized, fixed-width tag for a level.
fn severity_tag(level: Level) -> String {
    match level {
        Level::Info => paint("INFO ", Color::Green),
        Level::Warning => paint("WARN ", Color::Yellow),
        Level::Debug => paint("DEBUG", Color::Cyan),
        Level::Error => paint("ERROR", Color::Red),
        Level::Fatal => paint("FATAL", Color::Red),
        other => paint(&other.as_str().to_uppercase(), Color::Red),
    }
}

impl Format for CustomTextFormat {
    fn format(&self, record: &LogRecord, buf: &mut Vec<u8>) {
        let severity = self.show_level.then(|| severity_tag(record.level));
        let sub_command = (!self.sub_command.is_empty())
            .then(|| paint(&self.sub_command.to_uppercase(), Color::Blue));
        let timestamp = self
            .show_timestamp
            .then(|| render_timestamp(&record.time, &self.timestamp_layout));

        for line in record.message.split('\n') {
            if let Some(severity) = &severity {
                buf.extend_from_slice(severity.as_bytes());
                buf.extend_from_slice(b": ");
            }
            if let Some(sub_command) = &sub_command {
                buf.extend_from_slice(sub_command.as_bytes());
                buf.extend_from_slice(b" : ");
            }
            if let Some(timestamp) = &timestamp {
                buf.extend_from_slice(timestamp.as_bytes());
                buf.extend_from_slice(b" - ");
            }
            buf.extend_from_slice(line.as_bytes());
            if !line.ends_with('\n') {
                buf.push(b'\n');
            }
        }
    }
}

/// Keys the JSON formatter owns. Colliding fields are renamed `fields.<key>`.
const RESERVED_KEYS: [&str; 3] = ["level", "msg", "time"];

/// One JSON object per record, keys in sorted order.
///
/// ```text
/// {"level":"info","msg":"deployed","time":"2026-01-02T15:04:05+01:00"}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn format(&self, record: &LogRecord, buf: &mut Vec<u8>) {
        let mut object = Map::new();
        for (key, value) in &record.fields {
            let key = if RESERVED_KEYS.contains(&key.as_str()) {
                format!("fields.{key}")
            } else {
                key.clone()
            };
            object.insert(key, value.clone());
        }
        object.insert("level".to_string(), Value::from(record.level.as_str()));
        object.insert("msg".to_string(), Value::from(record.message.as_str()));
        object.insert(
            "time".to_string(),
            Value::from(record.time.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );

        // Serializing a Value into a Vec cannot fail.
        if serde_json::to_writer(&mut *buf, &Value::Object(object)).is_ok() {
            buf.push(b'\n');
        }
    }
}
