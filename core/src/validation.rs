//! Create-payload validation.
//!
//! # Design
//! Validation works on a `serde_json::Value` rather than deriving the checks
//! from `Deserialize`, so every bad field is reported at once with its own
//! `loc` instead of stopping at serde's first error. Types are checked
//! strictly: a numeric string is not a price and a number is not a name.
//! Keys other than `name`, `price` and `description` are ignored.

use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationFailed};
use crate::types::Item;

impl Item {
    /// Validate a JSON request body and build an `Item` from it.
    pub fn from_json(body: &Value) -> Result<Item, ValidationFailed> {
        let Some(fields) = body.as_object() else {
            return Err(ValidationFailed::single(FieldError::new(
                &["body"],
                "model_attributes_type",
                "Input should be a valid dictionary or object to extract fields from",
            )));
        };

        let mut errors = Vec::new();
        let name = name(fields, &mut errors);
        let price = price(fields, &mut errors);
        let description = description(fields, &mut errors);

        match (name, price, description) {
            (Some(name), Some(price), Some(description)) if errors.is_empty() => Ok(Item {
                name,
                price,
                description,
            }),
            _ => Err(ValidationFailed(errors)),
        }
    }
}

fn name(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match fields.get("name") {
        None => {
            errors.push(missing("name"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError::new(
                &["body", "name"],
                "string_too_short",
                "String should have at least 1 character",
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(not_a_string("name"));
            None
        }
    }
}

fn price(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<f64> {
    match fields.get("price") {
        None => {
            errors.push(missing("price"));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(price) if price > 0.0 => Some(price),
            _ => {
                errors.push(FieldError::new(
                    &["body", "price"],
                    "greater_than",
                    "Input should be greater than 0",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(
                &["body", "price"],
                "float_type",
                "Input should be a valid number",
            ));
            None
        }
    }
}

// Outer `Option` is validity, inner is presence.
fn description(
    fields: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match fields.get("description") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            errors.push(not_a_string("description"));
            None
        }
    }
}

fn missing(field: &str) -> FieldError {
    FieldError::new(&["body", field], "missing", "Field required")
}

fn not_a_string(field: &str) -> FieldError {
    FieldError::new(&["body", field], "string_type", "Input should be a valid string")
}
