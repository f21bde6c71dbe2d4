//! Leveled diagnostics for the ingestion components.
//!
//! Readers report skipped records and recoverable problems through a
//! [`DiagnosticSink`] handed in by the caller, so embedders decide where
//! messages go. [`LogSink`] forwards everything to the `log` facade,
//! [`CaptureSink`] retains reports in memory for inspection in tests.

use std::error::Error as StdError;
use std::sync::Mutex;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
        }
    }
}

/// Destination for diagnostics emitted while loading input data.
///
/// Implementations must be callable from worker threads.
pub trait DiagnosticSink: Send + Sync {
    /// Reports one message, optionally with the error that triggered it.
    fn report(&self, level: Level, message: &str, cause: Option<&(dyn StdError + 'static)>);

    fn debug(&self, message: &str) {
        self.report(Level::Debug, message, None);
    }

    fn info(&self, message: &str) {
        self.report(Level::Info, message, None);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warn, message, None);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message, None);
    }
}

/// Sink forwarding every report to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, level: Level, message: &str, cause: Option<&(dyn StdError + 'static)>) {
        let level = log::Level::from(level);
        match cause {
            Some(cause) => log::log!(level, "{message}: {cause}"),
            None => log::log!(level, "{message}"),
        }
    }
}

/// One report retained by [`CaptureSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    /// Rendered cause, when the report carried one.
    pub cause: Option<String>,
}

/// Sink recording every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CaptureSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of reports at exactly the given level.
    pub fn count_at(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }
}

impl DiagnosticSink for CaptureSink {
    fn report(&self, level: Level, message: &str, cause: Option<&(dyn StdError + 'static)>) {
        self.entries.lock().unwrap().push(Diagnostic {
            level,
            message: message.to_owned(),
            cause: cause.map(ToString::to_string),
        });
    }
}
