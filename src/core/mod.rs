//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod handler;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output_format;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use handler::{Handler, Sink};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::{LogEntry, SourceLocation};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use output_format::OutputFormat;
