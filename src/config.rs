//! Logger configuration resolution
//!
//! Maps the raw `--log-*` strings onto a concrete [`Logger`] in one linear
//! pass: level, then destination, then format. An empty level short-circuits
//! to a discarding logger before anything else is looked at, so neither the
//! destination nor the format is validated in that case.
//!
//! Accepted spellings:
//!
//! | setting        | values                                     |
//! |----------------|--------------------------------------------|
//! | `log-level`    | `""` (disabled), `debug`, `info`, `warn`, `err` |
//! | `log-format`   | `""`, `json`, `text`, `logfmt`             |
//! | `log-exporter` | `""` (stdout), `stderr`, any other value is a file path |
//!
//! Only `err` selects the error threshold; `error` is rejected.

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::core::{Appender, Handler, LogLevel, Logger, LoggerError, OutputFormat, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const LOG_SOURCE: &str = "log-source";
pub const LOG_LEVEL: &str = "log-level";
pub const LOG_FORMAT: &str = "log-format";
pub const LOG_EXPORTER: &str = "log-exporter";

/// Field attached to entries by the app-name rule in [`resolve`]
pub const APP_NAME_FIELD: &str = "app-name";

/// Parsed `log-level` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSpec {
    /// Logging disabled
    Unset,
    Level(LogLevel),
}

impl LevelSpec {
    /// Every accepted spelling, in table order
    pub const ACCEPTED: [&'static str; 5] = ["", "debug", "info", "warn", "err"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "" => Ok(LevelSpec::Unset),
            "debug" => Ok(LevelSpec::Level(LogLevel::Debug)),
            "info" => Ok(LevelSpec::Level(LogLevel::Info)),
            "warn" => Ok(LevelSpec::Level(LogLevel::Warn)),
            "err" => Ok(LevelSpec::Level(LogLevel::Error)),
            other => Err(LoggerError::config("log level", other)),
        }
    }
}

/// Parse a `log-format` value
pub fn parse_format(value: &str) -> Result<OutputFormat> {
    match value {
        "" | "json" => Ok(OutputFormat::Json),
        "text" | "logfmt" => Ok(OutputFormat::Text),
        other => Err(LoggerError::config("handler format", other)),
    }
}

/// Parsed `log-exporter` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Destination {
    pub fn parse(value: &str) -> Self {
        match value {
            "" => Destination::Stdout,
            "stderr" => Destination::Stderr,
            path => Destination::File(PathBuf::from(path)),
        }
    }

    /// Acquire the stream. A file destination is created, or truncated if it
    /// already exists.
    pub fn open(&self) -> Result<Box<dyn Appender>> {
        let appender: Box<dyn Appender> = match self {
            Destination::Stdout => Box::new(ConsoleAppender::stdout()),
            Destination::Stderr => Box::new(ConsoleAppender::stderr()),
            Destination::File(path) => Box::new(FileAppender::create(path)?),
        };
        Ok(appender)
    }
}

/// Flat logging settings, as read from flags or any serde source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    #[serde(rename = "app-name")]
    pub app_name: String,
    #[serde(rename = "log-level")]
    pub level: String,
    #[serde(rename = "log-format")]
    pub format: String,
    #[serde(rename = "log-exporter")]
    pub exporter: String,
    #[serde(rename = "log-source")]
    pub add_source: bool,
}

impl LogConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn exporter(mut self, exporter: impl Into<String>) -> Self {
        self.exporter = exporter.into();
        self
    }

    #[must_use]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    pub fn resolve(&self) -> Result<Logger> {
        resolve(
            &self.app_name,
            &self.level,
            &self.format,
            &self.exporter,
            self.add_source,
        )
    }
}

/// Build a logger from raw configuration strings.
///
/// Errors are [`LoggerError::InvalidConfig`] for an unknown level or format
/// and [`LoggerError::Io`] when a file destination cannot be created. A bad
/// format is only noticed after the destination has been opened, so a file
/// destination exists on disk even when this returns a format error.
///
/// When `app_name` is empty every entry carries an empty `app-name` field;
/// a non-empty name attaches nothing.
pub fn resolve(
    app_name: &str,
    level: &str,
    format: &str,
    destination: &str,
    add_source: bool,
) -> Result<Logger> {
    let min_level = match LevelSpec::parse(level)? {
        LevelSpec::Unset => return Ok(Logger::discard()),
        LevelSpec::Level(level) => level,
    };

    let appender = Destination::parse(destination).open()?;
    let format = parse_format(format)?;

    let logger = Logger::new(Handler::new(format, appender), min_level, add_source);

    if app_name.is_empty() {
        return Ok(logger.with(APP_NAME_FIELD, app_name));
    }

    Ok(logger)
}
