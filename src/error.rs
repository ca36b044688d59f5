//! Error types for unsuite library.

use std::io;
use thiserror::Error;

/// Result type alias for unsuite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during content extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a payload from disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload lacks the top-level field that carries its content.
    #[error("Missing payload field: {0}")]
    MissingPayload(&'static str),

    /// The payload has an unexpected shape at the top level.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A nested element has an unexpected shape.
    #[error("Malformed element at {path}: {reason}")]
    MalformedElement {
        /// Location of the element inside the payload
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// The content type selector was not recognized.
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// No extractor is registered for the requested content type.
    #[error("No extractor registered for {0}")]
    NoExtractor(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a [`Error::MalformedElement`] for the element at `path`.
    pub fn malformed_element(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedElement {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only means the payload had nothing to extract.
    pub fn is_missing_payload(&self) -> bool {
        matches!(self, Error::MissingPayload(_))
    }
}
