/*!
 * Error types for the wordcue application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

use crate::timecode::Timecode;

/// Errors that can occur while reading or splitting subtitle entries
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A time token does not match `HH:MM:SS,mmm`
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The offending token
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The line after an entry marker is missing or not a time range
    #[error("Malformed time range at line {line}: {reason}")]
    MalformedTimeRange {
        /// 1-based line number of the time-range line
        line: usize,
        /// Why it was rejected
        reason: String,
    },

    /// The entry ends before it starts
    #[error("Entry at line {line} ends before it starts ({start} --> {end})")]
    InvertedTimeRange {
        /// 1-based line number of the entry marker
        line: usize,
        start: Timecode,
        end: Timecode,
    },

    /// The entry text contains no words
    #[error("Entry at line {line} has no words")]
    EmptyEntry {
        /// 1-based line number of the entry marker
        line: usize,
    },

    /// Reading the subtitle stream failed
    #[error("Failed to read subtitle input: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Required command line arguments are missing
    #[error("Usage error: {0}")]
    Usage(String),

    /// A file could not be opened, created or flushed
    #[error("File error: {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// The configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap an I/O error with the path it happened on
    pub fn file<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::File { .. } | Self::Config(_) => 2,
            Self::Subtitle(_) => 3,
        }
    }
}
