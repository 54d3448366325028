//! Error types for the item store and payload validation.
//!
//! # Design
//! The store has exactly one failure mode, a missing id. Validation failures
//! are reported separately because they happen before the store is touched
//! and carry per-field detail for the caller.

use serde::Serialize;
use thiserror::Error;

use crate::types::ItemId;

/// Errors returned by `ItemStore` lookups and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item is stored under this id.
    #[error("item {0} not found")]
    NotFound(ItemId),
}

/// A single rejected field in a create payload.
///
/// `loc` is the path to the offending value, starting with `"body"` for
/// request bodies or `"path"` for route parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// The last path segment, e.g. `"price"` for `["body", "price"]`.
    pub fn field(&self) -> Option<&str> {
        self.loc.last().map(String::as_str)
    }
}

/// A payload was rejected. Always carries at least one `FieldError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.0))]
pub struct ValidationFailed(pub Vec<FieldError>);

impl ValidationFailed {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}
