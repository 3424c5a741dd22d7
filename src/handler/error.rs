//! Handler error module
//!
//! The failure type every handler returns. Errors carry the
//! client-visible message and are converted to HTTP responses at the
//! router boundary.

use hyper::StatusCode;
use thiserror::Error;

/// Handler failure with its client-visible message.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// 404 Not Found
    #[error("{0}")]
    NotFound(String),
    /// 400 Bad Request
    #[error("{0}")]
    BadRequest(String),
    /// 500 Internal Server Error
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    /// HTTP status the error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
