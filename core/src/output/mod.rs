//! Diagnostic output for the Beankeeper core
//!
//! Every diagnostic goes through [`DiagnosticLog::log`], which keeps a bounded
//! history for hosts to display and forwards the record to a
//! [`DiagnosticSink`]. The default sink writes to `tracing`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Number of records kept by default
pub const DEFAULT_CAPACITY: usize = 100;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Presentation symbol shown in front of the message
    pub fn symbol(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// Resolve a level name, falling back to `Info` for anything unknown
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "success" => Ok(LogLevel::Success),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// A single diagnostic line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Create a record stamped with the current time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// The message with its level symbol in front
    pub fn formatted(&self) -> String {
        format!("{} {}", self.level.symbol(), self.message)
    }
}

/// Destination for diagnostic records
pub trait DiagnosticSink: Send {
    /// Write one record
    fn write(&mut self, record: &LogRecord);
}

/// Sink that forwards records to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write(&mut self, record: &LogRecord) {
        let line = record.formatted();
        match record.level {
            LogLevel::Info | LogLevel::Success => tracing::info!("{}", line),
            LogLevel::Warning => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }
    }
}

/// Sink that discards all records (useful for testing)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write(&mut self, _record: &LogRecord) {}
}

/// Bounded diagnostic history plus the sink it writes through
pub struct DiagnosticLog {
    records: VecDeque<LogRecord>,
    capacity: usize,
    sink: Box<dyn DiagnosticSink>,
}

impl DiagnosticLog {
    /// Create a log that writes through `sink`
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: DEFAULT_CAPACITY,
            sink: Box::new(sink),
        }
    }

    /// Set the number of records kept in memory
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
        self
    }

    /// Record a diagnostic
    pub fn log(&mut self, message: impl Into<String>, level: LogLevel) {
        let record = LogRecord::new(level, message);
        self.sink.write(&record);

        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Success);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Error);
    }

    /// Records currently held, oldest first
    pub fn records(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&LogRecord> {
        self.records.back()
    }

    /// Number of held records at `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.records.iter().filter(|r| r.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for DiagnosticLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticLog")
            .field("records", &self.records.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
