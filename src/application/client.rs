/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::enrollment_service::EnrollmentServiceImpl;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point for the Thinkific API
///
/// Owns the HTTP client and hands out one service per API resource.
pub struct Client {
    http_client: Arc<HttpClient>,
    enrollments: EnrollmentServiceImpl<HttpClient>,
}

impl Client {
    /// Creates a new client from the given configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        debug!(
            "Client created for {}",
            http_client.config().rest_api.base_url
        );
        Ok(Self::with_http_client(http_client))
    }

    /// Creates a new client from the environment configuration
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client around an existing HTTP client
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        let enrollments = EnrollmentServiceImpl::new(http_client.clone());
        Self {
            http_client,
            enrollments,
        }
    }

    /// Enrollments resource
    pub fn enrollments(&self) -> &EnrollmentServiceImpl<HttpClient> {
        &self.enrollments
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }
}
