//! Error handling for HYSPLIT output parsing.
//!
//! Only failures that make a whole call meaningless are errors. Malformed
//! lines inside a readable file are never reported here; they are counted
//! in [`crate::stats::ParseStats`] and dropped.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HysplitError {
    #[error("Cannot read file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Table with {cols} columns matches no known output layout")]
    UnsupportedShape { cols: usize },

    #[error("Unsupported output format for {path} (expected .parquet or .csv)")]
    UnsupportedOutput { path: PathBuf },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Parse task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl HysplitError {
    /// Wrap an IO failure on an input file
    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HysplitError>;
