//! Application handle carrying the resolved logger

use crate::config::{resolve, LogConfig};
use crate::core::{Logger, Result};

/// Per-process application state
#[derive(Debug, Clone)]
pub struct App {
    app_name: String,
    logger: Logger,
}

impl App {
    /// Resolve a logger from raw settings and wrap it
    pub fn new(
        app_name: impl Into<String>,
        log_level: &str,
        log_format: &str,
        exporter: &str,
        add_source: bool,
    ) -> Result<Self> {
        let app_name = app_name.into();
        let logger = resolve(&app_name, log_level, log_format, exporter, add_source)?;

        Ok(Self { app_name, logger })
    }

    /// Resolve from a [`LogConfig`], which supplies the app name
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        Ok(Self {
            app_name: config.app_name.clone(),
            logger: config.resolve()?,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_new_app() {
        let app = App::new("unbabel", "info", "text", "stderr", false).unwrap();
        assert_eq!(app.app_name(), "unbabel");
        assert_eq!(app.logger().min_level(), LogLevel::Info);
    }

    #[test]
    fn test_app_propagates_config_error() {
        let err = App::new("unbabel", "bogus", "", "", false).unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: bogus");
    }

    #[test]
    fn test_from_config_disabled() {
        let app = App::from_config(&LogConfig::new("unbabel")).unwrap();
        assert!(!app.logger().enabled(LogLevel::Error));
    }
}
