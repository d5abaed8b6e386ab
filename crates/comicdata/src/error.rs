//! Error types for comicdata

use std::fmt;

/// Result type alias for comicdata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for payload decoding and encoding
#[derive(Debug)]
pub enum Error {
    /// Payload is not well-formed JSON
    Decode(serde_json::Error),

    /// Payload is JSON but not the expected envelope shape
    Shape(&'static str),

    /// Envelope could not be re-encoded
    Encode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Shape(msg) => write!(f, "Unexpected payload shape: {}", msg),
            Error::Encode(e) => write!(f, "Encode error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(e) | Error::Encode(e) => Some(e),
            Error::Shape(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
