use crate::error::AppError;
use crate::model::options::Options;
use crate::model::requests::FindByRequest;
use crate::model::responses::{ApiResponse, Enrollment, FindResult};
use async_trait::async_trait;

/// Interface for the enrollment service
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Lists enrollments
    ///
    /// # Arguments
    /// * `options` - Query parameters passed through verbatim, e.g. `page`, `limit`
    ///
    /// # Returns
    /// * The raw page as returned by the API
    async fn list(&self, options: &Options) -> Result<ApiResponse, AppError>;

    /// Creates an enrollment from the given fields
    async fn create(&self, options: &Options) -> Result<Enrollment, AppError>;

    /// Gets a single enrollment by id
    async fn get(&self, id: &str) -> Result<Enrollment, AppError>;

    /// Updates an enrollment
    ///
    /// # Returns
    /// * `Some(Enrollment)` - The updated record, when the server sends one back
    /// * `None` - When the server answers without content
    async fn update(&self, id: &str, options: &Options) -> Result<Option<Enrollment>, AppError>;

    /// Expires an enrollment
    ///
    /// Wrapper for `update` which sets the expiry date. When `expiry_date` is
    /// `None`, empty or `"0"`, today at midnight (local time) is used; otherwise
    /// the value is sent as is and is expected to be ISO-8601.
    async fn expire(
        &self,
        id: &str,
        expiry_date: Option<&str>,
    ) -> Result<Option<Enrollment>, AppError>;

    /// Finds enrollments by a filter field, `user_id` by default
    ///
    /// # Arguments
    /// * `request` - Value, field, extra options and whether a single result is wanted
    ///
    /// # Returns
    /// * `FindResult::Found` - First item, when a single result was requested
    /// * `FindResult::NotFound` - A single result was requested and the page was empty
    /// * `FindResult::Page` - The raw page, unchanged, otherwise (including when
    ///   `items` is missing or not an array)
    async fn find_by(&self, request: &FindByRequest) -> Result<FindResult, AppError>;
}
