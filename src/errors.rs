use crate::{directory::VerifyError, store::StoreError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or identifier. The detail is shown to the caller.
    BadRequest(String),
    NotFound(&'static str),
    /// The user-service could not be asked. Never collapse this into `NotFound`.
    UserServiceUnavailable(VerifyError),
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        ApiError::UserServiceUnavailable(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert our custom errors to HTTP responses
///
/// Every failure carries `{"error": "..."}`. Internal and upstream details go
/// to the log, not to the caller.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "error": msg
                    })),
                )
                    .into_response();
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UserServiceUnavailable(err) => {
                warn!("User-service unavailable: {}", err);
                (StatusCode::BAD_GATEWAY, "cannot connect to user-service")
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
