// crates/meetup-core/src/error.rs - Error taxonomy for event generation

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which time-of-day field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors that can occur while resolving parameters or writing the article.
///
/// Every variant is a user-input or environment-precondition failure. The
/// CLI reports the message on a single line and exits nonzero; nothing here
/// is recoverable mid-run.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid {field} time '{value}': {reason}")]
    InvalidTime {
        field: TimeField,
        value: String,
        reason: String,
    },

    #[error("invalid time zone '{0}': not in the time zone database")]
    InvalidTimeZone(String),

    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid location index {index}: valid range is 0..{table_len}")]
    InvalidLocation { index: usize, table_len: usize },

    #[error("'{}' directory does not exist - run this in a site workspace", .0.display())]
    ContentDirectoryMissing(PathBuf),

    #[error("'{}' must be a directory in order to create files in it", .0.display())]
    ContentPathNotDirectory(PathBuf),

    #[error("{} exists - refusing to overwrite it", .0.display())]
    EventFileAlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for event generation operations.
pub type EventResult<T> = Result<T, EventError>;
