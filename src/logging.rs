/// Leveled logging for the scraper.
///
/// Timestamped log lines with severity levels, written to stderr so stdout
/// stays reserved for the rendered data table. Verbosity is chosen once at
/// startup from the command line.

use chrono::Utc;
use std::fmt;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel) {
        *LOGGER.lock().unwrap() = Some(Logger { min_level });
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        eprintln!("{} {} {}", timestamp, level, message);
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger. Messages below `min_level` are dropped;
/// before initialization everything is dropped.
pub fn init_logger(min_level: LogLevel) {
    Logger::init(min_level);
}

/// Log a general informational message
pub fn info(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, message);
    }
}

/// Log a warning message
pub fn warn(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, message);
    }
}

/// Log an error message
pub fn error(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, message);
    }
}

/// Log a debug message
pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, message);
    }
}
