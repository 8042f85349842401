//! Logger backends
//!
//! A logger is backed by exactly one of a small closed set of handlers:
//! a discarding one for "logging disabled", or an encoder bound to a sink.

use super::{appender::Appender, error::Result, log_entry::LogEntry, output_format::OutputFormat};
use parking_lot::Mutex;

/// Shared, write-serialised output sink
pub type Sink = Mutex<Box<dyn Appender>>;

pub enum Handler {
    /// Accepts entries and writes nothing
    Discard,
    /// One JSON object per line
    Json(Sink),
    /// Flat key=value pairs per line
    Text(Sink),
}

impl Handler {
    pub fn new(format: OutputFormat, appender: Box<dyn Appender>) -> Self {
        let sink = Mutex::new(appender);
        match format {
            OutputFormat::Json => Handler::Json(sink),
            OutputFormat::Text => Handler::Text(sink),
        }
    }

    /// False only for the discarding backend
    pub fn enabled(&self) -> bool {
        !matches!(self, Handler::Discard)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        match self {
            Handler::Discard => None,
            Handler::Json(_) => Some(OutputFormat::Json),
            Handler::Text(_) => Some(OutputFormat::Text),
        }
    }

    /// Encode and write one entry
    ///
    /// The entry is encoded before the sink lock is taken, so the lock only
    /// covers the write of a complete line.
    pub fn handle(&self, entry: &LogEntry) -> Result<()> {
        let (format, sink) = match self {
            Handler::Discard => return Ok(()),
            Handler::Json(sink) => (OutputFormat::Json, sink),
            Handler::Text(sink) => (OutputFormat::Text, sink),
        };

        let record = format.format(entry);
        sink.lock().append(&record)
    }

    pub fn flush(&self) -> Result<()> {
        match self {
            Handler::Discard => Ok(()),
            Handler::Json(sink) | Handler::Text(sink) => sink.lock().flush(),
        }
    }

    /// Name of the underlying appender
    pub fn sink_name(&self) -> String {
        match self {
            Handler::Discard => "discard".to_string(),
            Handler::Json(sink) | Handler::Text(sink) => sink.lock().name().to_string(),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Discard => write!(f, "Handler::Discard"),
            Handler::Json(_) => write!(f, "Handler::Json({})", self.sink_name()),
            Handler::Text(_) => write!(f, "Handler::Text({})", self.sink_name()),
        }
    }
}
