/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Thinkific Client
//!
//! A thin async client for the enrollments resource of the Thinkific public API.
//!
//! The crate is organised in three layers:
//!
//! - `application`: configuration, the enrollment service trait and its implementation
//! - `model`: the HTTP collaborator, request parameters and response models
//! - `utils`: environment and logging helpers
//!
//! ## Example
//!
//! ```ignore
//! use thinkific_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let enrollments = client.enrollments();
//!
//! let page = enrollments.list(&Options::new().with("page", 1)).await?;
//! let found = enrollments
//!     .find_by(&FindByRequest::new("1234").single())
//!     .await?;
//! enrollments.expire("42", None).await?;
//! ```

/// Application layer: configuration, client and enrollment services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP collaborator, parameter and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
