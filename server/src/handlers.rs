//! Request handlers for the item API.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use item_core::{Item, ItemId, ItemStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::ApiError;

/// Store handle shared by every handler.
pub type SharedStore = Arc<ItemStore>;

pub const WELCOME_MESSAGE: &str = "欢迎使用 FastAPI CI/CD 示例 API！";
pub const HEALTHY_MESSAGE: &str = "服务运行正常";

/// Body of the informational responses (`/`, `/health`, delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

pub async fn root() -> Json<Message> {
    Message::new(WELCOME_MESSAGE)
}

pub async fn health() -> Json<Message> {
    Message::new(HEALTHY_MESSAGE)
}

#[instrument(skip_all)]
pub async fn list_items(State(store): State<SharedStore>) -> Json<Vec<Item>> {
    let items = store.list();
    debug!(count = items.len(), "listed items");
    Json(items)
}

#[instrument(skip_all)]
pub async fn get_item(
    State(store): State<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id?.0)?;
    let item = store
        .get(id)
        .inspect_err(|_| debug!(item_id = %id, "item not found"))?;
    Ok(Json(item))
}

#[instrument(skip_all)]
pub async fn create_item(
    State(store): State<SharedStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(body) = body.inspect_err(|e| debug!(error = %e, "unreadable create body"))?;
    let item = Item::from_json(&body).inspect_err(|e| debug!(error = %e, "rejected item"))?;
    let (id, item) = store.create(item);
    info!(item_id = %id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip_all)]
pub async fn delete_item(
    State(store): State<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_item_id(&id?.0)?;
    store.delete(id).inspect_err(|_| debug!(item_id = %id, "item not found"))?;
    info!(item_id = %id, "deleted item");
    Ok(Message::new(format!("商品 ID {id} 已成功删除")))
}

/// Parse a path segment as an integer of any size.
///
/// Non-integers are a 422. Integers outside the `ItemId` range can never
/// have been allocated, so they are a 404 like any other unknown id.
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!(raw, "non-integer item id");
        return Err(ApiError::invalid_item_id(format!(
            "Input should be a valid integer, unable to parse string as an integer: `{raw}`"
        )));
    }

    let magnitude = digits.trim_start_matches('0');
    if magnitude.is_empty() {
        return Ok(ItemId::from(0));
    }
    if negative {
        return Err(ApiError::UnknownId(format!("-{magnitude}")));
    }
    magnitude
        .parse::<u64>()
        .map(ItemId::from)
        .map_err(|_| ApiError::UnknownId(magnitude.to_string()))
}
