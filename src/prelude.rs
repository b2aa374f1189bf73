/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Thinkific Client Prelude
//!
//! Commonly used types and traits of the library in a single import.
//!
//! ## Usage
//!
//! ```rust
//! use thinkific_client::prelude::*;
//!
//! let config = Config::with_credentials("api-key", "my-school");
//! let options = Options::new().with("page", 1).with("limit", 25);
//! assert_eq!(options.len(), 2);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Thinkific API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Client entry point
pub use crate::application::client::Client;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ThinkificResult};

// ============================================================================
// SERVICES
// ============================================================================

/// Enrollment service trait
pub use crate::application::interfaces::enrollment::EnrollmentService;

/// Enrollment service implementation
pub use crate::application::services::enrollment_service::{
    EnrollmentServiceImpl, build_find_by_options,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// HTTP collaborator trait and its reqwest implementation
pub use crate::model::http::{HttpClient, ThinkificHttpClient};

/// Request parameters
pub use crate::model::options::Options;
pub use crate::model::requests::FindByRequest;

/// Response models
pub use crate::model::responses::{ApiResponse, Enrollment, FindResult, Pagination};

/// Date and filter helpers
pub use crate::model::utils::{filter_key, today_midnight_iso8601};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
