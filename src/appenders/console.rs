//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Which standard stream a console appender writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &str) -> Result<()> {
        // Hold the stream lock for the whole line so concurrent writers
        // elsewhere in the process cannot split it.
        match self.stream {
            ConsoleStream::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", record)?;
            }
            ConsoleStream::Stderr => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", record)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
