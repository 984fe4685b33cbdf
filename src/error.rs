// src/error.rs

//! Error types for the band converter

use crate::band::BandError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting band files
#[derive(Debug, Error)]
pub enum Error {
    /// Directory listing, file read, or output write failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file does not hold a well-formed band
    #[error("Malformed band file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: BandError,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Build an I/O error bound to the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was caused by malformed input rather than the filesystem
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, Error>;
