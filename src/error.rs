/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type for the SIP client.
//!
//! Every failure is surfaced to the caller as one of these variants; the
//! client never retries or recovers on its own.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the SIP client
#[derive(Debug, Error)]
pub enum AppError {
    /// The construction-time liveness probe could not reach the host
    #[error("connection failure: {0}")]
    ConnectionFailure(String),

    /// The credential exchange was rejected with 401
    #[error("invalid username or password")]
    InvalidLogin,

    /// The refresh token was rejected with 401
    #[error("refresh token has expired")]
    RefreshTokenExpired,

    /// The access token was rejected because it expired; refresh and retry
    #[error("access token has expired")]
    AccessTokenExpired,

    /// The server answered 409; carries the raw response body
    #[error("conflict: {0}")]
    Conflict(String),

    /// The server answered with a non-success status; carries the raw body
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// A response did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The caller asked for something the current configuration cannot do
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file access failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns true when the error can be cleared by refreshing the access token
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        matches!(self, AppError::AccessTokenExpired)
    }

    /// Returns the raw response body carried by `Conflict` and `RequestFailed`
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Conflict(body) | AppError::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}
