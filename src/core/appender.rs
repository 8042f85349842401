//! Appender trait for log output destinations

use super::error::Result;

/// Byte sink for already-encoded records.
///
/// `append` receives one record without its trailing newline; the appender
/// terminates it.
pub trait Appender: Send {
    fn append(&mut self, record: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
