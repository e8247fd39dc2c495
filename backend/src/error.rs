//! Error types for registry operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registry_common::ErrorResponse;

/// Errors surfaced to API callers.
///
/// The payload is the human-readable message returned in the response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    CorruptStore(String),
}

impl RegistryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::Conflict(_) => StatusCode::CONFLICT,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Auth(_) => StatusCode::UNAUTHORIZED,
            RegistryError::Io(_) | RegistryError::CorruptStore(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RegistryError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(RegistryError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(RegistryError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(RegistryError::Auth("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            RegistryError::CorruptStore("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_bare_message() {
        let err = RegistryError::Auth("Incorrect password".to_string());
        assert_eq!(err.to_string(), "Incorrect password");
    }
}
