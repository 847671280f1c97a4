use thiserror::Error;

use crate::send::SendError;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building, encoding or decoding Messenger payloads.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("remote: {0}")]
    Remote(SendError),

    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("transport: {0}")]
    Transport(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// The remote error payload, if this error came back from the platform.
    pub fn as_remote(&self) -> Option<&SendError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// A required field was absent when a value was finalized or encoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required field `{field}`")]
pub struct ValidationError {
    field: String,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Path of the missing field, e.g. `message.attachment.payload.url`.
    pub fn field(&self) -> &str {
        &self.field
    }
}
