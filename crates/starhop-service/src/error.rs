//! Error responses in the `{"error": "..."}` wire shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use starhop_lib::{Error as LibError, RouteOutcome};

/// Returned when `start` or `destination` is missing or empty.
pub const MISSING_PARAMETERS: &str = "Missing parameters";

/// Returned when a route calculation exceeds the configured timeout.
pub const TIMED_OUT: &str = "Route calculation timed out";

/// Returned for faults with no public error shape.
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn missing_parameters() -> Self {
        Self::new(StatusCode::BAD_REQUEST, MISSING_PARAMETERS)
    }

    pub fn invalid_jump_range() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            starhop_lib::output::INVALID_JUMP_RANGE,
        )
    }

    pub fn timed_out() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, TIMED_OUT)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}

impl From<&LibError> for ApiError {
    /// Unknown systems and unreachable destinations keep a 200 status with
    /// the message in the body.
    fn from(err: &LibError) -> Self {
        let status = match err {
            LibError::UnknownSystem { .. } | LibError::RouteNotFound { .. } => StatusCode::OK,
            LibError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            _ => return Self::internal(),
        };
        match RouteOutcome::from_error(err) {
            Some(RouteOutcome::Error(message)) => Self::new(status, message),
            _ => Self::internal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(RouteOutcome::Error(self.message))).into_response()
    }
}
