//! File appender implementation

use crate::core::{Appender, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct FileAppender {
    writer: BufWriter<File>,
}

impl FileAppender {
    /// Create the file, truncating anything already at `path`
    ///
    /// The underlying `std::io::Error` is returned untouched on failure.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &str) -> Result<()> {
        self.writer.write_all(record.as_bytes())?;
        self.writer.write_all(b"\n")?;
        // Records reach the file one complete line at a time.
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_create_truncates() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "stale line\n")?;

        let mut appender = FileAppender::create(&log_path)?;
        appender.append("fresh")?;

        assert_eq!(fs::read_to_string(&log_path)?, "fresh\n");
        Ok(())
    }

    #[test]
    fn test_create_in_missing_directory_fails() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("missing").join("app.log");

        let err = FileAppender::create(&log_path).err().expect("creation should fail");
        match err {
            LoggerError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
        Ok(())
    }
}
