//! HTTP mapping for store and validation failures.

use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use item_core::{FieldError, StoreError, ValidationFailed};
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return. Each maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with a plain-text `detail`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 404 for an integer path id that no `ItemId` can hold, such as a
    /// negative number. Carries the id as written, minus leading zeros.
    #[error("item {0} not found")]
    UnknownId(String),

    /// 422 with a list of field errors as `detail`.
    #[error(transparent)]
    Validation(#[from] ValidationFailed),
}

/// Body of a 404 response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body of a 422 response.
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub detail: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(StoreError::NotFound(id)) => not_found(id),
            ApiError::UnknownId(id) => not_found(id),
            ApiError::Validation(ValidationFailed(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationDetail { detail: errors }),
            )
                .into_response(),
        }
    }
}

fn not_found(id: impl Display) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: format!("商品 ID {id} 未找到"),
        }),
    )
        .into_response()
}

impl ApiError {
    /// 422 for a path id that is not an integer at all.
    pub fn invalid_item_id(msg: impl Into<String>) -> Self {
        ApiError::Validation(ValidationFailed::single(FieldError::new(
            &["path", "item_id"],
            "int_parsing",
            msg,
        )))
    }
}

// Extractor rejections are request-shape problems, so they are reported the
// same way as a bad field rather than with axum's default 400/415 text.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_invalid",
        };
        ApiError::Validation(ValidationFailed::single(FieldError::new(
            &["body"],
            kind,
            rejection.body_text(),
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_item_id(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use item_core::ItemId;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::from(StoreError::NotFound(ItemId(3))).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_id_maps_to_404() {
        let resp = ApiError::UnknownId("-1".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let err = ValidationFailed::single(FieldError::new(&["body", "name"], "missing", "Field required"));
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
