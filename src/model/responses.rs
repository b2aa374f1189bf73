/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single enrollment record as returned by the API
///
/// The record is kept as an ordered JSON object; the accessors below are
/// optional lookups and never fail on missing or differently typed fields.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enrollment(Map<String, Value>);

impl Enrollment {
    /// Builds an enrollment from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::Deserialization(format!(
                "expected an enrollment object, got {other}"
            ))),
        }
    }

    /// Raw field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Server assigned identifier
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// Identifier of the enrolled user
    pub fn user_id(&self) -> Option<&Value> {
        self.get("user_id")
    }

    /// Email of the enrolled user
    pub fn user_email(&self) -> Option<&str> {
        self.get("user_email").and_then(Value::as_str)
    }

    /// Identifier of the course
    pub fn course_id(&self) -> Option<&Value> {
        self.get("course_id")
    }

    /// Expiry date as sent by the server (ISO-8601)
    pub fn expiry_date(&self) -> Option<&str> {
        self.get("expiry_date").and_then(Value::as_str)
    }

    /// All fields of the record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the record and returns its fields
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Enrollment {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Pagination block of a list response
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Pagination {
    /// Page returned by this response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u64>,
    /// Next page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    /// Previous page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u64>,
    /// Total number of pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Human readable summary, e.g. "1-25 of 120"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries_info: Option<String>,
}

/// Untyped API result
///
/// The body is kept exactly as the server sent it. List endpoints answer
/// `{ "items": [...], "meta": {...} }`; the accessors below read those fields
/// when they have the expected shape and return `None` otherwise.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse {
    fields: Map<String, Value>,
}

impl ApiResponse {
    /// Builds a response from the JSON value returned by the HTTP client
    ///
    /// An empty body (`null`) gives an empty response.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AppError::Deserialization(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Raw top level field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Items of the current page, when `items` is an array
    pub fn items(&self) -> Option<&Vec<Value>> {
        self.get("items").and_then(Value::as_array)
    }

    /// First item of the page, when it is an enrollment object
    pub fn first(&self) -> Option<Enrollment> {
        self.items()
            .and_then(|items| items.first())
            .and_then(|item| item.as_object())
            .map(|fields| Enrollment(fields.clone()))
    }

    /// Raw `meta` block, whatever its shape
    pub fn meta(&self) -> Option<&Value> {
        self.get("meta")
    }

    /// Pagination details, when the server sent them in the usual shape
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta()
            .and_then(|meta| meta.get("pagination"))
            .and_then(|pagination| serde_json::from_value(pagination.clone()).ok())
    }

    /// All top level fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the response and returns its fields
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

/// Outcome of a `find_by` call
#[derive(Debug, Clone, PartialEq)]
pub enum FindResult {
    /// A single result was requested and the page had at least one item
    Found(Enrollment),
    /// A single result was requested and the page had no items
    NotFound,
    /// The raw page, when a single result was not requested or `items` was not an array
    Page(ApiResponse),
}

impl FindResult {
    /// The found enrollment, if any
    pub fn into_enrollment(self) -> Option<Enrollment> {
        match self {
            Self::Found(enrollment) => Some(enrollment),
            _ => None,
        }
    }

    /// The raw page, if this is one
    pub fn into_page(self) -> Option<ApiResponse> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }
}
