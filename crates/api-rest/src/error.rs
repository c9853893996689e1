//! HTTP error mapping.
//!
//! Every non-2xx response carries an [`ErrorRes`] body: `{"message": "..."}`.

use api_shared::wire::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use healthassist_core::PortalError;

/// Handler errors with their HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The detail is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorRes { message })).into_response()
    }
}

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::Validation(message) => ApiError::BadRequest(message),
            PortalError::Text(e) => ApiError::BadRequest(e.to_string()),
            PortalError::NotFound(message) => ApiError::NotFound(message),
            PortalError::Auth(message) => ApiError::Unauthorized(message),
            e @ (PortalError::LockPoisoned(_) | PortalError::Config(_)) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_errors_map_to_statuses() {
        let cases = [
            (PortalError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (PortalError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (PortalError::Auth("x".into()), StatusCode::UNAUTHORIZED),
            (
                PortalError::LockPoisoned("claim"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
