//! Error codes and the HTTP error surface.
//!
//! DESIGN
//! ======
//! Every error type in the crate implements [`ErrorCode`] so logs and
//! responses carry a grepable code plus a retryable flag. Only [`ApiError`]
//! ever reaches a client; extraction failures are absorbed below the request
//! boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error body key for the grepable error code.
pub const ERROR_CODE: &str = "code";

/// Error body key for the human-readable message.
pub const ERROR_MESSAGE: &str = "message";

/// Error body key for the client-facing detail string.
pub const ERROR_DETAIL: &str = "detail";

/// Error body key for the retryable flag.
pub const ERROR_RETRYABLE: &str = "retryable";

/// Grepable error code and retry hint attached to every error type.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// API ERROR
// =============================================================================

/// Errors surfaced to HTTP callers of `/generate`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Both extraction paths ran and produced no nodes.
    #[error("no nodes recognized")]
    NoNodesRecognized,

    /// The requested renderer is not one of the supported notations.
    #[error("unknown renderer: {0}")]
    UnknownRenderer(String),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoNodesRecognized => "E_NO_NODES_RECOGNIZED",
            Self::UnknownRenderer(_) => "E_UNKNOWN_RENDERER",
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoNodesRecognized | Self::UnknownRenderer(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// JSON error body. `detail` and `message` carry the same text.
    #[must_use]
    pub fn body(&self) -> serde_json::Value {
        let message = self.to_string();
        serde_json::json!({
            ERROR_DETAIL: message,
            ERROR_CODE: self.error_code(),
            ERROR_MESSAGE: message,
            ERROR_RETRYABLE: self.retryable(),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
