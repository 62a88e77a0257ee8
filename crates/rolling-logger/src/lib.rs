//! Rolling Logger
//!
//! `log` backend keeping the most recent records in a bounded ring buffer.
//! Every accepted record is also mirrored to the browser console (wasm32)
//! or stderr (native).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger with a fixed-capacity circular buffer
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of buffered entries, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        // A panic while holding the lock leaves the buffer usable
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(&entry.to_string());
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    eprintln!("{}", entry);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Only the first call's settings take effect.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("goboard_ui::api")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_most_recent_entries() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            record(&logger, Level::Info, &format!("msg {}", i));
        }
        let messages: Vec<String> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        record(&logger, Level::Debug, "noise");
        record(&logger, Level::Info, "noise");
        record(&logger, Level::Warn, "careful");
        record(&logger, Level::Error, "broken");

        let levels: Vec<Level> = logger.recent().into_iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![Level::Warn, Level::Error]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_entry() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        assert_eq!(logger.capacity(), 1);
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
        assert_eq!(logger.recent()[0].message, "b");
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(4, LevelFilter::Info);
        record(&logger, Level::Info, "a");
        logger.clear();
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry {
            timestamp: DateTime::parse_from_rfc3339("2024-03-01T10:20:30.456Z")
                .unwrap()
                .with_timezone(&Utc),
            level: Level::Warn,
            target: "goboard_ui::api".to_string(),
            message: "request failed".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "2024-03-01T10:20:30.456Z WARN  goboard_ui::api: request failed"
        );
    }

    #[test]
    fn test_global_logger_exposes_recent_entries() {
        let installed = init(16, LevelFilter::Debug).unwrap();
        log::info!(target: "goboard_ui::api", "fetched boards");

        let logger = logger().unwrap();
        assert!(std::ptr::eq(logger, installed));
        assert!(logger
            .recent()
            .iter()
            .any(|e| e.target == "goboard_ui::api" && e.message == "fetched boards"));

        logger.clear();
        assert!(logger.recent().iter().all(|e| e.message != "fetched boards"));
    }
}
