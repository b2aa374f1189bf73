/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_QUERY_FIELD;
use crate::model::options::Options;
use serde_json::Value;

/// Parameters for finding enrollments by a filter field
///
/// Defaults to a search by `user_id` returning the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct FindByRequest {
    /// Value to search for, e.g. a user id or an email
    pub value: Value,
    /// Field to filter on, e.g. `user_id` or `email`
    pub field: String,
    /// Additional options, e.g. `page` or `limit`
    pub options: Options,
    /// Return only the first matching enrollment
    pub single: bool,
}

impl FindByRequest {
    /// Create a search by user id for the given value
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            field: DEFAULT_QUERY_FIELD.to_string(),
            options: Options::new(),
            single: false,
        }
    }

    /// Set the field to filter on
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Set the additional options
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Request only the first matching enrollment
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }
}
