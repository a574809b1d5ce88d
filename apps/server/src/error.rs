//! HTTP mapping for core errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use donorhub_core::errors::{DatabaseError, Error as CoreError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning core errors into HTTP responses with a JSON error body.
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CoreError::Database(DatabaseError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg.clone())
            }
            CoreError::Database(DatabaseError::UniqueViolation(msg))
            | CoreError::Database(DatabaseError::ForeignKeyViolation(msg)) => {
                (StatusCode::CONFLICT, msg.clone())
            }
            CoreError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            CoreError::Insights(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            other => {
                // Storage and unexpected failures: log the detail, return a
                // generic message so internals stay internal.
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
