//! Error types for the groundtrack library

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for groundtrack operations
pub type Result<T> = std::result::Result<T, SpeedError>;

/// Error types for speed estimation and capture operations
#[derive(Error, Debug)]
pub enum SpeedError {
    /// A stored image lacks the required geolocation or timestamp metadata
    #[error("missing geotag metadata in {}: {reason}", path.display())]
    MissingMetadata { path: PathBuf, reason: String },

    /// Elapsed time between two fixes is zero
    #[error("zero-duration interval between consecutive fixes")]
    ZeroDuration,

    /// Camera or position collaborator failed during the capture loop
    #[error("capture failed: {message}")]
    Capture {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be loaded or saved
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Result artifact or image directory could not be accessed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl SpeedError {
    /// Create a missing-metadata error for an image
    pub fn missing_metadata(path: &Path, reason: impl Into<String>) -> Self {
        Self::MissingMetadata {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a capture error with context
    pub fn capture<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Capture {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Check if this error is recovered by skipping the offending pair
    ///
    /// The aggregator never propagates recoverable errors; it drops the
    /// affected sample and continues with the rest of the sequence.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SpeedError::MissingMetadata { .. } | SpeedError::ZeroDuration
        )
    }
}
