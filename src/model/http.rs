/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{API_KEY_HEADER, SUBDOMAIN_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::options::Options;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP collaborator used by the resource services
///
/// Paths are relative to the API base URL. Failures of any kind (transport,
/// non-success status, malformed JSON) are returned as `AppError` and are
/// never handled by the services.
#[async_trait]
pub trait ThinkificHttpClient: Send + Sync {
    /// Makes a GET request with `params` as query string
    async fn get(&self, path: &str, params: &Options) -> Result<Value, AppError>;

    /// Makes a POST request with `body` as JSON
    async fn post(&self, path: &str, body: &Options) -> Result<Value, AppError>;

    /// Makes a PUT request with `body` as JSON
    async fn put(&self, path: &str, body: &Options) -> Result<Value, AppError>;
}

/// reqwest based client for the Thinkific public API
///
/// Every request carries the API key and subdomain headers from the
/// configuration. There is no retry and no rate limiting.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Builds the full URL for a path relative to the base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Makes a request and parses the JSON response
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&Options>,
        body: Option<&Options>,
    ) -> Result<Value, AppError> {
        let url = self.url_for(path);
        let credentials = &self.config.credentials;
        let headers = vec![
            (API_KEY_HEADER, credentials.api_key.as_str()),
            (SUBDOMAIN_HEADER, credentials.subdomain.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        let response =
            make_http_request(&self.http_client, method, &url, headers, params, body).await?;
        parse_response(response).await
    }
}

#[async_trait]
impl ThinkificHttpClient for HttpClient {
    async fn get(&self, path: &str, params: &Options) -> Result<Value, AppError> {
        self.request(Method::GET, path, Some(params), None).await
    }

    async fn post(&self, path: &str, body: &Options) -> Result<Value, AppError> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Options) -> Result<Value, AppError> {
        self.request(Method::PUT, path, None, Some(body)).await
    }
}

/// Makes a single HTTP request and maps non-success statuses to errors
///
/// # Arguments
///
/// * `client` - The reqwest client to use
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `params` - Optional query parameters, flattened with the bracket convention
/// * `body` - Optional JSON body
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport failure or non-success status
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://api.thinkific.com/api/public/v1/enrollments",
///     vec![("X-Auth-API-Key", "key"), ("X-Auth-Subdomain", "school")],
///     Some(&Options::new().with("query[user_id]", "5")),
///     None,
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    params: Option<&Options>,
    body: Option<&Options>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(params) = params {
        request = request.query(&params.to_query_pairs());
    }

    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::FORBIDDEN => {
            error!("Forbidden: {}", body_text);
            Err(AppError::Forbidden)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            error!("Rate limit exceeded: {}", body_text);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Unexpected(status))
        }
    }
}

/// Parses a response body as JSON; an empty body gives `Value::Null`
async fn parse_response(response: Response) -> Result<Value, AppError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
