//! Error types for readalong-core organized by processing stage.

use thiserror::Error;

/// Engine error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transcript loading stage error
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

/// Configuration errors (thresholds, tracker knobs).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Similarity threshold outside the valid score range
    #[error("invalid similarity threshold: {0} (must be within 0.0..=1.0)")]
    InvalidSimilarity(f64),

    /// Zero skip distance would make advance mode unable to progress
    #[error("invalid max distance: {0} (minimum 1)")]
    InvalidMaxDistance(usize),
}

/// Transcript loading and parsing errors.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Every record in the transcript failed to parse
    #[error("no valid records in transcript ({skipped} lines skipped)")]
    NoValidRecords { skipped: usize },

    /// IO error while reading the transcript
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for readalong-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// std::io::Error → TranscriptError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Transcript(TranscriptError::Io(e))
    }
}
