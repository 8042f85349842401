//! Command line surface of the `unbabel` binary

use crate::app::App;
use crate::config::{LogConfig, LOG_EXPORTER, LOG_FORMAT, LOG_LEVEL, LOG_SOURCE};
use crate::convert::{convert, InputType};
use crate::core::{LogContext, LogLevel, LoggerError, Result};
use clap::Parser;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub const APP_NAME: &str = "unbabel";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "Take JSON, pbf, SQL or Go structs and turn them into any of the aforementioned")]
#[command(
    long_about = "unbabel INPUTTYPE [FILE instead of stdin]\nTake JSON and turn it into PBF, Go structs, or SQL"
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Log level to use. None for no logs, or debug, info, warn, err
    #[arg(long = LOG_LEVEL, default_value = "")]
    pub log_level: String,

    /// Log exporter to use. Blank writes to stdout, 'stderr' to stderr, anything else creates that file
    #[arg(long = LOG_EXPORTER, default_value = "")]
    pub log_exporter: String,

    /// Log format to use. Blank or 'json' for JSON lines, or logfmt/text
    #[arg(long = LOG_FORMAT, default_value = "")]
    pub log_format: String,

    /// Make all logging show where the log occurred
    #[arg(long = LOG_SOURCE)]
    pub log_source: bool,

    /// One of json, sql, go, pbf, or version
    pub input_type: Option<String>,

    /// Read input from this file instead of stdin
    pub file: Option<PathBuf>,

    /// Accepted and ignored; a fourth argument is rejected
    #[arg(hide = true)]
    pub extra: Option<String>,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(APP_NAME)
            .level(self.log_level.as_str())
            .format(self.log_format.as_str())
            .exporter(self.log_exporter.as_str())
            .add_source(self.log_source)
    }
}

/// Execute a parsed command line, printing the version to `out` when asked
pub fn run<W: std::io::Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.version {
        writeln!(out, "{}", VERSION)?;
        return Ok(());
    }

    let input_type = cli
        .input_type
        .as_deref()
        .ok_or_else(|| LoggerError::usage("incorrect number of args"))?;

    if input_type == "version" {
        writeln!(out, "{}", VERSION)?;
        return Ok(());
    }

    let app = App::from_config(&cli.log_config())?;
    let logger = app.logger();

    let input_type: InputType = input_type.parse()?;

    let reader: Box<dyn Read> = match cli.file {
        Some(ref path) => Box::new(File::open(path)?),
        None => Box::new(std::io::stdin().lock()),
    };

    let source = cli
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    logger.log_with_context(
        LogLevel::Debug,
        "reading input",
        LogContext::new()
            .with_field("input_type", input_type.as_str())
            .with_field("source", source),
    );

    let result = convert(input_type, reader, logger);
    if let Err(ref e) = result {
        logger.log_with_context(
            LogLevel::Error,
            "conversion failed",
            LogContext::new()
                .with_field("input_type", input_type.as_str())
                .with_field("error", e.to_string()),
        );
    }
    logger.flush()?;

    result
}
