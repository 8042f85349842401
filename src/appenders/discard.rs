//! Appender that swallows every record

use crate::core::{Appender, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardAppender;

impl DiscardAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for DiscardAppender {
    fn append(&mut self, _record: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
