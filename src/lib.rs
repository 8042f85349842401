//! # unbabel
//!
//! Command line conversion between JSON, SQL schemas, Go structs and
//! protobuf definitions, plus the structured logger the tool configures from
//! its `--log-*` flags.
//!
//! ## Logging
//!
//! - **Resolver**: [`config::resolve`] turns level, format and destination
//!   strings into a ready [`Logger`] or an error
//! - **Backends**: discarding, JSON lines, or flat `key=value` text
//! - **Destinations**: stdout, stderr, or a freshly created file
//! - **Thread Safe**: writes to a sink are serialised line by line

pub mod app;
pub mod appenders;
pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::app::App;
    pub use crate::appenders::{ConsoleAppender, DiscardAppender, FileAppender};
    pub use crate::config::{resolve, Destination, LevelSpec, LogConfig};
    pub use crate::core::{
        Appender, FieldValue, Handler, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerError, OutputFormat, Result, SourceLocation,
    };
}

pub use app::App;
pub use appenders::{ConsoleAppender, DiscardAppender, FileAppender};
pub use config::{resolve, Destination, LevelSpec, LogConfig};
pub use core::{
    Appender, FieldValue, Handler, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, OutputFormat, Result, SourceLocation,
};
