use crate::application::interfaces::enrollment::EnrollmentService;
use crate::constants::ENROLLMENTS_PATH;
use crate::error::AppError;
use crate::model::http::ThinkificHttpClient;
use crate::model::options::Options;
use crate::model::requests::FindByRequest;
use crate::model::responses::{ApiResponse, Enrollment, FindResult};
use crate::model::utils::{filter_key, today_midnight_iso8601};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the enrollment service on top of an HTTP client
pub struct EnrollmentServiceImpl<T: ThinkificHttpClient> {
    client: Arc<T>,
}

impl<T: ThinkificHttpClient> EnrollmentServiceImpl<T> {
    /// Creates a new instance of the enrollment service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    /// Gets the underlying HTTP client
    pub fn client(&self) -> Arc<T> {
        self.client.clone()
    }
}

impl<T: ThinkificHttpClient> Clone for EnrollmentServiceImpl<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

/// Builds the query parameters for a find-by search
///
/// The filter key goes first, caller options are laid over it and the paging
/// constraints of a single search are laid over everything. A caller option
/// named like the filter key therefore replaces the searched value.
pub fn build_find_by_options(
    value: Value,
    field: &str,
    options: &Options,
    single: bool,
) -> Options {
    let mut merged = Options::new().with(filter_key(field), value);
    merged.merge(options.clone());

    if single {
        merged.merge(Options::new().with("page", 1).with("limit", 1));
    }

    merged
}

fn is_unset_date(date: &str) -> bool {
    date.is_empty() || date == "0"
}

fn enrollment_path(id: &str) -> String {
    format!("{ENROLLMENTS_PATH}/{id}")
}

#[async_trait]
impl<T: ThinkificHttpClient + 'static> EnrollmentService for EnrollmentServiceImpl<T> {
    async fn list(&self, options: &Options) -> Result<ApiResponse, AppError> {
        info!("Listing enrollments");

        let value = self.client.get(ENROLLMENTS_PATH, options).await?;
        let result = ApiResponse::from_value(value)?;

        debug!(
            "Enrollments obtained: {} items",
            result.items().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn create(&self, options: &Options) -> Result<Enrollment, AppError> {
        info!("Creating enrollment");

        let value = self.client.post(ENROLLMENTS_PATH, options).await?;
        let enrollment = Enrollment::from_value(value)?;

        debug!("Enrollment created: {:?}", enrollment.id());
        Ok(enrollment)
    }

    async fn get(&self, id: &str) -> Result<Enrollment, AppError> {
        info!("Getting enrollment: {}", id);

        let value = self
            .client
            .get(&enrollment_path(id), &Options::new())
            .await?;
        let enrollment = Enrollment::from_value(value)?;

        debug!("Enrollment obtained: {}", id);
        Ok(enrollment)
    }

    async fn update(&self, id: &str, options: &Options) -> Result<Option<Enrollment>, AppError> {
        info!("Updating enrollment: {}", id);

        let value = self.client.put(&enrollment_path(id), options).await?;
        let enrollment = match value {
            Value::Null => None,
            other => Some(Enrollment::from_value(other)?),
        };

        debug!("Enrollment updated: {}", id);
        Ok(enrollment)
    }

    async fn expire(
        &self,
        id: &str,
        expiry_date: Option<&str>,
    ) -> Result<Option<Enrollment>, AppError> {
        let expiry_date = match expiry_date {
            Some(date) if !is_unset_date(date) => date.to_string(),
            _ => today_midnight_iso8601(),
        };
        info!("Expiring enrollment {} at {}", id, expiry_date);

        self.update(id, &Options::new().with("expiry_date", expiry_date))
            .await
    }

    async fn find_by(&self, request: &FindByRequest) -> Result<FindResult, AppError> {
        info!(
            "Finding enrollments by {} (single: {})",
            request.field, request.single
        );

        let options = build_find_by_options(
            request.value.clone(),
            &request.field,
            &request.options,
            request.single,
        );
        let result = self.list(&options).await?;

        if !request.single {
            return Ok(FindResult::Page(result));
        }

        let first_item = result.items().map(|items| items.first().cloned());
        match first_item {
            Some(Some(first)) => Ok(FindResult::Found(Enrollment::from_value(first)?)),
            Some(None) => {
                debug!("No enrollment found by {}", request.field);
                Ok(FindResult::NotFound)
            }
            None => Ok(FindResult::Page(result)),
        }
    }
}
