/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the Thinkific client.
//!
//! Every failure of the HTTP collaborator (transport, status or JSON) surfaces
//! as an `AppError` and is propagated unchanged by the enrollment service.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport level failure reported by reqwest
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed JSON in a request or response
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The API key or subdomain was rejected (401)
    #[error("unauthorized")]
    Unauthorized,

    /// The credentials are valid but lack access to the resource (403)
    #[error("forbidden")]
    Forbidden,

    /// The requested resource does not exist (404)
    #[error("not found")]
    NotFound,

    /// The server answered 429; requests are not retried
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Any other non-success status
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// A response did not have the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Input that cannot be turned into request parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used across the crate
pub type ThinkificResult<T> = Result<T, AppError>;
