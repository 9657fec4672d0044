use thiserror::Error;

use crate::http::error::BceHttpError;

/// Top-level error type surfaced by the service clients.
#[derive(Error, Debug)]
pub enum BceError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error(transparent)]
    Http(#[from] BceHttpError),
    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl BceError {
    /// The BCE error code of the failing request, when the server sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            BceError::Http(err) => err.code(),
            _ => None,
        }
    }

    /// The `requestId` of the failing request, when the server sent one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            BceError::Http(err) => err.request_id(),
            _ => None,
        }
    }
}
