//! Output encodings for log entries
//!
//! - Json: one JSON object per line (default)
//! - Text: flat `key=value` pairs per line, logfmt compatible

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use chrono::SecondsFormat;
use std::borrow::Cow;

/// Keys written for every entry; context fields may not take them over
const BUILTIN_KEYS: [&str; 4] = ["time", "level", "source", "msg"];

/// Context key as written, moved under `fields.` if it names a built-in key
fn field_key(key: &str) -> Cow<'_, str> {
    if BUILTIN_KEYS.contains(&key) {
        Cow::Owned(format!("fields.{}", key))
    } else {
        Cow::Borrowed(key)
    }
}

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08T10:30:45.123Z","level":"INFO","msg":"Request processed"}`
    #[default]
    Json,

    /// Flat key=value pairs
    ///
    /// Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed"`
    Text,
}

impl OutputFormat {
    /// Format a log entry according to this output format, without trailing newline
    pub fn format(&self, entry: &LogEntry) -> String {
        match self {
            OutputFormat::Json => self.format_json(entry),
            OutputFormat::Text => self.format_text(entry),
        }
    }

    fn format_timestamp(entry: &LogEntry) -> String {
        entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Format as JSON
    fn format_json(&self, entry: &LogEntry) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "time".to_string(),
            serde_json::Value::String(Self::format_timestamp(entry)),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );

        if let Some(ref source) = entry.source {
            let mut source_obj = serde_json::Map::new();
            if let Some(ref module_path) = source.module_path {
                source_obj.insert(
                    "function".to_string(),
                    serde_json::Value::String(module_path.clone()),
                );
            }
            source_obj.insert(
                "file".to_string(),
                serde_json::Value::String(source.file.clone()),
            );
            source_obj.insert(
                "line".to_string(),
                serde_json::Value::Number(source.line.into()),
            );
            json_obj.insert("source".to_string(), serde_json::Value::Object(source_obj));
        }

        json_obj.insert(
            "msg".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        for (key, value) in entry.context.fields() {
            json_obj.insert(field_key(key).into_owned(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format as key=value pairs
    fn format_text(&self, entry: &LogEntry) -> String {
        let mut parts = Vec::with_capacity(4 + entry.context.len());

        parts.push(format!("time={}", Self::format_timestamp(entry)));
        parts.push(format!("level={}", entry.level.to_str()));

        if let Some(ref source) = entry.source {
            parts.push(format!(
                "source={}",
                escape_text_value(&format!("{}:{}", source.file, source.line))
            ));
        }

        parts.push(format!("msg={}", escape_text_value(&entry.message)));

        for (key, value) in entry.context.fields() {
            let formatted_value = match value {
                FieldValue::String(s) => escape_text_value(s),
                other => other.to_string(),
            };
            let key = escape_text_key(key);
            parts.push(format!("{}={}", field_key(&key), formatted_value));
        }

        parts.join(" ")
    }
}

/// Strip characters that would break key=value tokenisation
fn escape_text_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Quote a value if it is empty or contains separators
fn escape_text_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control());

    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
