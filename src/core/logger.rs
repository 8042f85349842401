//! Main logger implementation

use super::{
    appender::Appender,
    handler::Handler,
    log_context::{FieldValue, LogContext},
    log_entry::{LogEntry, SourceLocation},
    log_level::LogLevel,
    output_format::OutputFormat,
};
use crate::appenders::ConsoleAppender;
use std::panic::Location;
use std::sync::Arc;

/// Entry-emitting handle bound to one handler, threshold and attribute set.
///
/// Cloning is cheap; clones and children made with [`Logger::with`] share the
/// same sink.
#[derive(Debug, Clone)]
pub struct Logger {
    handler: Arc<Handler>,
    min_level: LogLevel,
    add_source: bool,
    fields: LogContext,
}

impl Logger {
    #[must_use]
    pub fn new(handler: Handler, min_level: LogLevel, add_source: bool) -> Self {
        Self {
            handler: Arc::new(handler),
            min_level,
            add_source,
            fields: LogContext::new(),
        }
    }

    /// Logger that never emits anything
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Handler::Discard, LogLevel::Off, false)
    }

    /// Child logger whose entries all carry `key=value`
    #[must_use]
    pub fn with<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut child = self.clone();
        child.fields.add_field(key, value);
        child
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn adds_source(&self) -> bool {
        self.add_source
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.handler.format()
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Attributes attached to every entry of this logger
    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    /// Whether an entry at `level` would be written
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.min_level && self.handler.enabled()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.emit(level, message.as_ref(), None, None, Location::caller());
    }

    /// Log with structured context fields for this entry only
    #[track_caller]
    pub fn log_with_context(&self, level: LogLevel, message: impl AsRef<str>, context: LogContext) {
        self.emit(level, message.as_ref(), Some(context), None, Location::caller());
    }

    /// Used by the logging macros to record the calling module as well
    #[doc(hidden)]
    #[track_caller]
    pub fn log_in_module(&self, level: LogLevel, message: impl AsRef<str>, module_path: &'static str) {
        self.emit(level, message.as_ref(), None, Some(module_path), Location::caller());
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        context: Option<LogContext>,
        module_path: Option<&'static str>,
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let mut entry = LogEntry::new(level, message);

        if self.add_source {
            let mut source = SourceLocation::from_caller(caller);
            if let Some(module_path) = module_path {
                source = source.with_module_path(module_path);
            }
            entry = entry.with_source(source);
        }

        match context {
            Some(context) if !self.fields.is_empty() => {
                let mut merged = self.fields.clone();
                merged.extend(&context);
                entry = entry.with_context(merged);
            }
            Some(context) => entry = entry.with_context(context),
            None => entry = entry.with_context(self.fields.clone()),
        }

        if let Err(e) = self.handler.handle(&entry) {
            eprintln!(
                "[LOGGER ERROR] Appender {} failed: {}",
                self.handler.sink_name(),
                e
            );
        }
    }

    pub fn flush(&self) -> super::error::Result<()> {
        self.handler.flush()
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use unbabel::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .output_format(OutputFormat::Text)
///     .appender(ConsoleAppender::stderr())
///     .field("service", "unbabel")
///     .build();
///
/// assert!(logger.enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    output_format: OutputFormat,
    appender: Option<Box<dyn Appender>>,
    add_source: bool,
    fields: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            output_format: OutputFormat::Json,
            appender: None,
            add_source: false,
            fields: LogContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the record encoding
    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the output sink. Defaults to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(self, appender: A) -> Self {
        self.boxed_appender(Box::new(appender))
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Record the call site of every entry
    #[must_use = "builder methods return a new value"]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    /// Attach a field to every entry
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::stdout()));
        let mut logger = Logger::new(
            Handler::new(self.output_format, appender),
            self.min_level,
            self.add_source,
        );
        logger.fields = self.fields;
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
