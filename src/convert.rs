//! Input type dispatch for the converter
//!
//! Only JSON input is read today, and only validated: generating Go structs,
//! SQL or protobuf from it is not implemented.

use crate::core::{LogContext, LogLevel, Logger, LoggerError, Result};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Representation an input document is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Json,
    Sql,
    Go,
    Pbf,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Json => "json",
            InputType::Sql => "sql",
            InputType::Go => "go",
            InputType::Pbf => "pbf",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(InputType::Json),
            "sql" => Ok(InputType::Sql),
            "go" => Ok(InputType::Go),
            "pbf" => Ok(InputType::Pbf),
            other => Err(LoggerError::UnknownFormat(other.to_string())),
        }
    }
}

/// Read and process one input document
pub fn convert<R: Read>(input_type: InputType, mut reader: R, logger: &Logger) -> Result<()> {
    match input_type {
        InputType::Json => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;

            let document: serde_json::Value = serde_json::from_str(&buf)?;
            logger.log_with_context(
                LogLevel::Debug,
                "parsed json input",
                LogContext::new()
                    .with_field("bytes", buf.len())
                    .with_field("shape", describe(&document)),
            );
            Ok(())
        }
        InputType::Sql | InputType::Go | InputType::Pbf => Err(LoggerError::Unimplemented),
    }
}

fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => format!("object({})", map.len()),
        serde_json::Value::Array(items) => format!("array({})", items.len()),
        serde_json::Value::String(_) => "string".to_string(),
        serde_json::Value::Number(_) => "number".to_string(),
        serde_json::Value::Bool(_) => "bool".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
