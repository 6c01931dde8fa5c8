use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use easyroute_store::{AuthError, BookingError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::AuthenticationError(err.to_string()),
            AuthError::EmailAlreadyRegistered(_) => AppError::ConflictError(err.to_string()),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match &err {
            BookingError::TripNotFound(_) => AppError::NotFoundError(err.to_string()),
            BookingError::TripNotOpen { .. }
            | BookingError::NoSeatsAvailable(_)
            | BookingError::DuplicateBooking { .. } => AppError::ConflictError(err.to_string()),
            BookingError::InvalidWaypointSelection(_) => AppError::ValidationError(err.to_string()),
        }
    }
}
