//! Error types for rich text conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting rich text into styled runs.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input document.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The HTML parser could not build a tree for the input.
    #[error("HTML parsing error: {0}")]
    HtmlParseError(String),

    /// The requested input format name is not supported.
    #[error("Unsupported or unrecognized input format: {0}")]
    UnsupportedFormat(String),

    /// Runs could not be serialized or read back.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
