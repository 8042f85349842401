//! Appender implementations

pub mod console;
pub mod discard;
pub mod file;

pub use console::{ConsoleAppender, ConsoleStream};
pub use discard::DiscardAppender;
pub use file::FileAppender;

pub use crate::core::Appender;
