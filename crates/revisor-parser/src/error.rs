//! Error types for the double-check response parser

use thiserror::Error;

/// Errors that can occur while parsing double-check output
#[derive(Error, Debug)]
pub enum ParseError {
    /// Payload has the wrong overall shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Payload is not JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A required top-level field is absent
    #[error("Missing field: {0}")]
    MissingField(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::JsonParse(e.to_string())
    }
}
