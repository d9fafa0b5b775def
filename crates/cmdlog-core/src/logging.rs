//! The logging service: level, active formatter, and output sink.
//!
//! Configuration changes (`set_level`, `set_output`, `set_formatter`, and the
//! sub-command helpers) are serialized by one lock. Emitting a record does not
//! take that lock: it reads the current level and formatter, renders, then
//! writes under the sink lock. A swap made while another thread is logging
//! therefore only affects records that read the configuration afterwards;
//! callers that need a clean sub-command boundary must pause other loggers.

use cmdlog_types::{Level, LogFormat, LoggingConfig, Result};
use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::format::{formatter_for, CustomTextFormat, Format};
use crate::logger::Logger;
use crate::record::LogRecord;

thread_local! {
    static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(256));
}

type Sink = Box<dyn Write + Send>;

/// Shared logging state behind every [`Logger`] handle.
pub struct Logging {
    config_lock: Mutex<()>,
    level: RwLock<Level>,
    formatter: RwLock<Arc<dyn Format>>,
    sink: Mutex<Sink>,
}

impl Logging {
    /// Build a service writing to stderr.
    pub fn new(config: &LoggingConfig) -> Self {
        let formatter: Arc<dyn Format> = match config.format {
            LogFormat::Text if config.show_timestamp => Arc::new(
                CustomTextFormat::new("").with_timestamp(config.timestamp_layout.as_str()),
            ),
            format => formatter_for(format),
        };

        Self {
            config_lock: Mutex::new(()),
            level: RwLock::new(config.level),
            formatter: RwLock::new(formatter),
            sink: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Handle with no default fields.
    pub fn logger(self: &Arc<Self>) -> Logger {
        Logger::new(Arc::clone(self))
    }

    /// Current minimum level.
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Parse `name` and make it the minimum level.
    ///
    /// An unrecognized name leaves the current level in place.
    pub fn set_level(&self, name: &str) -> Result<()> {
        let level: Level = name.parse()?;
        self.set_max_level(level);
        Ok(())
    }

    /// Make `level` the minimum level.
    pub fn set_max_level(&self, level: Level) {
        let _config = self.config_lock.lock();
        *self.level.write() = level;
    }

    /// Send every later write to `sink`.
    ///
    /// The sink is written under a non-reentrant lock, so it must not log
    /// through this service (directly or via a `tracing` event).
    pub fn set_output<W>(&self, sink: W)
    where
        W: Write + Send + 'static,
    {
        let _config = self.config_lock.lock();
        *self.sink.lock() = Box::new(sink);
    }

    /// Install `formatter` for every later record.
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: Format + 'static,
    {
        self.install(Arc::new(formatter));
    }

    /// Install the stock formatter for `format`.
    pub fn set_format(&self, format: LogFormat) {
        self.install(formatter_for(format));
    }

    fn install(&self, formatter: Arc<dyn Format>) {
        let _config = self.config_lock.lock();
        *self.formatter.write() = formatter;
    }

    /// Tag every later text line with `sub_command`.
    pub fn begin_sub_command(&self, sub_command: &str) {
        self.set_formatter(CustomTextFormat::new(sub_command));
    }

    /// Drop the sub-command tag.
    pub fn end_sub_command(&self) {
        self.set_formatter(CustomTextFormat::new(""));
    }

    /// Begin a sub-command that ends when the returned scope is dropped.
    pub fn sub_command(&self, sub_command: &str) -> SubCommandScope<'_> {
        self.begin_sub_command(sub_command);
        SubCommandScope { logging: self }
    }

    /// Run `action` with output captured in memory and return what it logged.
    ///
    /// The sink is set back to stderr afterwards, also when `action` panics.
    pub fn capture_output<F>(&self, action: F) -> String
    where
        F: FnOnce(),
    {
        let buffer = SharedBuffer::default();
        self.set_output(buffer.clone());
        {
            let _restore = RestoreStderr { logging: self };
            action();
        }
        buffer.contents()
    }

    /// Render and write `record` if its level is enabled.
    pub fn emit(&self, record: &LogRecord) {
        if !self.enabled(record.level) {
            return;
        }
        let formatter = self.formatter.read().clone();

        let written = BUFFER
            .try_with(|cell| match cell.try_borrow_mut() {
                Ok(mut buf) => {
                    buf.clear();
                    formatter.format(record, &mut buf);
                    self.write(&buf);
                    true
                }
                Err(_) => false,
            })
            .unwrap_or(false);

        if !written {
            let mut buf = Vec::new();
            formatter.format(record, &mut buf);
            self.write(&buf);
        }
    }

    fn write(&self, bytes: &[u8]) {
        let mut sink = self.sink.lock();
        if let Err(err) = sink.write_all(bytes).and_then(|()| sink.flush()) {
            eprintln!("Failed to write to log, {err}");
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self::new(&LoggingConfig::default())
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logging")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// Ends a sub-command when dropped. See [`Logging::sub_command`].
#[must_use = "the sub-command ends as soon as the scope is dropped"]
#[derive(Debug)]
pub struct SubCommandScope<'a> {
    logging: &'a Logging,
}

impl Drop for SubCommandScope<'_> {
    fn drop(&mut self) {
        self.logging.end_sub_command();
    }
}

struct RestoreStderr<'a> {
    logging: &'a Logging,
}

impl Drop for RestoreStderr<'_> {
    fn drop(&mut self) {
        self.logging.set_output(io::stderr());
    }
}

/// In-memory sink that can be cloned and read back.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::JsonFormat;
    use cmdlog_types::LogError;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    fn service() -> Arc<Logging> {
        Arc::new(Logging::default())
    }

    #[test]
    fn test_default_level_is_info() {
        let logging = service();
        let logger = logging.logger();
        let output = logging.capture_output(|| {
            logger.debug("hidden");
            logger.info("shown");
        });
        assert_eq!(output, "\x1b[32mINFO \x1b[0m: shown\n");
    }

    #[test]
    fn test_invalid_level_keeps_previous() {
        let logging = service();
        let logger = logging.logger();
        logging.set_level("warn").unwrap();

        let before = logging.capture_output(|| {
            logger.info("below");
            logger.warn("at");
        });
        assert!(!before.contains("below"));
        assert!(before.contains("at"));

        assert_eq!(
            logging.set_level("bogus"),
            Err(LogError::InvalidLevel("bogus".to_string()))
        );
        assert_eq!(logging.level(), Level::Warning);

        let after = logging.capture_output(|| {
            logger.info("below");
            logger.warn("at");
        });
        assert_eq!(before, after);
    }

    #[test]
    fn test_capture_only_sees_its_own_writes() {
        let logging = service();
        let logger = logging.logger();
        let earlier = SharedBuffer::default();
        logging.set_output(earlier.clone());

        logger.info("before");
        let captured = logging.capture_output(|| logger.info("during"));
        logger.info("after");

        assert_eq!(captured, "\x1b[32mINFO \x1b[0m: during\n");
        // "after" went to stderr rather than back to the earlier sink.
        assert_eq!(earlier.contents(), "\x1b[32mINFO \x1b[0m: before\n");
    }

    #[test]
    fn test_capture_restores_stderr_on_panic() {
        let logging = service();
        let logger = logging.logger();
        let earlier = SharedBuffer::default();
        logging.set_output(earlier.clone());

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            logging.capture_output(|| {
                logger.info("partial");
                panic!("action failed");
            })
        }));
        assert!(result.is_err());

        logger.info("after");
        assert_eq!(earlier.contents(), "");

        let captured = logging.capture_output(|| logger.info("again"));
        assert_eq!(captured, "\x1b[32mINFO \x1b[0m: again\n");
    }

    #[test]
    fn test_sub_command_visible_to_clones() {
        let logging = service();
        let first = logging.logger();
        let second = first.with_field("step", 1);

        let output = logging.capture_output(|| {
            logging.begin_sub_command("build");
            first.info("one");
            second.info("two");
            logging.end_sub_command();
            first.info("three");
        });

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\x1b[32mINFO \x1b[0m: \x1b[34mBUILD\x1b[0m : one");
        assert_eq!(lines[1], "\x1b[32mINFO \x1b[0m: \x1b[34mBUILD\x1b[0m : two");
        assert_eq!(lines[2], "\x1b[32mINFO \x1b[0m: three");
    }

    #[test]
    fn test_sub_command_scope() {
        let logging = service();
        let logger = logging.logger();

        let output = logging.capture_output(|| {
            {
                let _scope = logging.sub_command("deploy");
                logger.warn("rolling");
            }
            logger.warn("done");
        });

        assert!(output.lines().next().unwrap().contains("DEPLOY"));
        assert!(!output.lines().nth(1).unwrap().contains("DEPLOY"));
    }

    #[test]
    fn test_sub_command_replaces_json() {
        let logging = service();
        logging.set_formatter(JsonFormat);
        let logger = logging.logger();

        let output = logging.capture_output(|| {
            logger.info("structured");
            logging.begin_sub_command("sync");
            logger.info("tagged");
        });

        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with('{'));
        assert!(lines[1].contains("SYNC"));
    }

    #[test]
    fn test_config_selects_formatter() {
        let config = LoggingConfig {
            level: Level::Debug,
            format: LogFormat::Json,
            ..LoggingConfig::default()
        };
        let logging = Arc::new(Logging::new(&config));
        let logger = logging.logger();
        let output = logging.capture_output(|| logger.debug("json"));
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["level"], "debug");

        let config = LoggingConfig {
            show_timestamp: true,
            timestamp_layout: "%Y".to_string(),
            ..LoggingConfig::default()
        };
        let logging = Arc::new(Logging::new(&config));
        let logger = logging.logger();
        let output = logging.capture_output(|| logger.info("stamped"));
        let year = chrono::Local::now().format("%Y").to_string();
        assert!(output.contains(&format!("{year} - stamped")));
    }

    #[test]
    fn test_concurrent_writes_stay_whole() {
        let logging = service();
        let buffer = SharedBuffer::default();
        logging.set_output(buffer.clone());

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let logger = logging.logger();
                thread::spawn(move || {
                    for n in 0..50 {
                        logger.info(format!("worker {worker} line {n}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let output = buffer.contents();
        assert_eq!(output.lines().count(), 200);
        assert!(output
            .lines()
            .all(|line| line.starts_with("\x1b[32mINFO \x1b[0m: worker ")));
    }
}
