use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejected user identifier input
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid User ID: {0:?} is not a number")]
    NotNumeric(String),

    #[error("Please enter a valid User ID: {0} is not positive")]
    NotPositive(i64),
}

/// Response body that is not valid JSON even after sanitization
#[derive(thiserror::Error, Debug)]
#[error("Invalid JSON body: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Failure of a single backend resource fetch
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Classifies a reqwest failure, keeping timeouts distinct from other transport errors
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Page server errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
