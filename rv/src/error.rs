//! Error types for decoding and streaming

use thiserror::Error;

/// A single input line that could not be turned into an event record
///
/// Always carries the raw line so the failure can be shown to the user.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {source}")]
    Syntax {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object, got {found}")]
    NotAnObject { line: String, found: &'static str },
}

impl DecodeError {
    /// The original line that failed to decode
    pub fn line(&self) -> &str {
        match self {
            DecodeError::Syntax { line, .. } | DecodeError::NotAnObject { line, .. } => line,
        }
    }
}

/// Failures that stop the stream
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Failed to read input")]
    Read(#[source] std::io::Error),

    #[error("Failed to write output")]
    Write(#[source] std::io::Error),
}
