//! Host log forwarding.
//!
//! The core logs through `tracing`. Hosts whose stdout goes nowhere (an
//! Android app process) register a [`LoggerSink`] and receive every event
//! that passes the filter as a [`LogEntry`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, as used in filter directives (`core_media=debug`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event mirrored to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    /// Module path of the emitting code, e.g. `core_media::service`.
    pub target: String,
    pub message: String,
    /// Structured fields recorded on the event, sorted by name.
    pub fields: BTreeMap<String, String>,
    /// Name of the innermost span the event was emitted in.
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: BTreeMap::new(),
            span: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn in_span(mut self, name: impl Into<String>) -> Self {
        self.span = Some(name.into());
        self
    }

    /// Single-line rendering for line-oriented host logs:
    /// `span: message key=value key=value`.
    ///
    /// Level, time and target are left out; host loggers record those
    /// themselves.
    pub fn line(&self) -> String {
        let mut line = match &self.span {
            Some(span) => format!("{}: {}", span, self.message),
            None => self.message.clone(),
        };
        for (key, value) in &self.fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        line
    }
}

/// Destination for mirrored core logs.
///
/// - **Android**: Logcat (`bridge_android::LogcatSink`)
/// - **Desktop**: not needed, the `fmt` layer writes to stdout
///
/// Entries below [`min_level`](LoggerSink::min_level) are dropped before
/// they are built.
#[async_trait::async_trait]
pub trait LoggerSink: Send + Sync {
    async fn log(&self, entry: LogEntry) -> Result<()>;

    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}
