use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared_http::api::{ErrorResponse, FieldError, ValidationErrorResponse, TODO_NOT_FOUND};
use tracing::error;

/// Every way a todo handler can fail
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    NotFound,
    Internal(String),
}

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        match err {
            shared::Error::NotFound => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(TODO_NOT_FOUND)),
            )
                .into_response(),
            ApiError::Internal(message) => {
                error!("Request failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(message)),
                )
                    .into_response()
            }
        }
    }
}
