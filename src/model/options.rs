/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request parameters passed verbatim to the Thinkific API.
//!
//! `Options` is an ordered string-keyed mapping used both as query parameters
//! (GET) and as JSON body (POST/PUT). Merging follows "last write wins": a key
//! that is written again keeps its original position but takes the new value.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered request parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty set of options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` and returns the options, for chained construction
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`, replacing any previous value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Overlays `other` on top of these options; values from `other` win
    pub fn merge(&mut self, other: Options) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Same as [`Options::merge`] but consumes and returns `self`
    #[must_use]
    pub fn merged(mut self, other: Options) -> Self {
        self.merge(other);
        self
    }

    /// Looks up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top level keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Iterates over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Flattens the options into query string pairs
    ///
    /// Arrays and objects use the bracket convention the API expects
    /// (`ids[0]=1`, `query[email]=x`), booleans become `1`/`0` and nulls are dropped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            flatten_into(key.clone(), value, &mut pairs);
        }
        pairs
    }

    /// Consumes the options and returns the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                flatten_into(format!("{key}[{field}]"), item, pairs);
            }
        }
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Options {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(AppError::InvalidInput(format!(
                "options must be a JSON object, got {other}"
            ))),
        }
    }
}
