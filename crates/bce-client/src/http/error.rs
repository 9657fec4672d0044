use std::fmt::{Display, Formatter};

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error envelope every BCE service returns on failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BceErrorBody {
    pub code: String,
    pub message: String,
    pub request_id: String,
}

impl Display for BceErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}, Message: {}, RequestId: {}",
            self.code, self.message, self.request_id
        )
    }
}

#[derive(Error, Debug)]
pub enum BceHttpError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Resource not found: {0}")]
    NotFound(BceErrorBody),
    #[error("Access denied: {0}")]
    AccessDenied(BceErrorBody),
    #[error("Service error {status}: {body}")]
    ServiceError {
        status: StatusCode,
        body: BceErrorBody,
    },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(String),
}

impl BceHttpError {
    fn body(&self) -> Option<&BceErrorBody> {
        match self {
            BceHttpError::NotFound(body)
            | BceHttpError::AccessDenied(body)
            | BceHttpError::ServiceError { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The BCE error code of the failing request, when the server sent one.
    pub fn code(&self) -> Option<&str> {
        self.body().map(|body| body.code.as_str())
    }

    /// The `requestId` of the failing request, when the server sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.body().map(|body| body.request_id.as_str())
    }

    /// Transport failures and 5xx replies are worth retrying; everything
    /// else is a caller or permission problem.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            BceHttpError::Transport(_) => true,
            BceHttpError::ServiceError { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for BceHttpError {
    fn from(error: reqwest::Error) -> Self {
        BceHttpError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_error_envelope() {
        let body: BceErrorBody = serde_json::from_str(
            r#"{"code":"NoSuchObject","message":"resource not exist","requestId":"a-b-c"}"#,
        )
        .unwrap();
        assert_eq!(body.code, "NoSuchObject");
        assert_eq!(body.request_id, "a-b-c");
    }

    #[test]
    fn missing_envelope_fields_default_to_empty() {
        let body: BceErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(body.code, "");
        assert_eq!(body.message, "boom");
    }

    #[test]
    fn only_transport_and_server_errors_retry() {
        let server = BceHttpError::ServiceError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: BceErrorBody::default(),
        };
        assert!(server.is_retryable());
        assert!(BceHttpError::Transport("reset".into()).is_retryable());
        assert!(!BceHttpError::NotFound(BceErrorBody::default()).is_retryable());
    }
}
