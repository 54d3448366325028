//! Route table for the item API.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use item_core::ItemStore;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_item, delete_item, get_item, health, list_items, root, SharedStore};

/// Build the router around an existing store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Build the router around a fresh, empty store.
pub fn app() -> Router {
    router(Arc::new(ItemStore::new()))
}
