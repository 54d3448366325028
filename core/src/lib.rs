//! Domain core for the item catalog service.
//!
//! # Overview
//! Holds the item record type, create-payload validation and the in-memory
//! `ItemStore`. Nothing here performs I/O or depends on an async runtime;
//! the `item-server` crate wraps it in HTTP.
//!
//! # Design
//! - `ItemStore` is an ordinary value. Whoever needs one constructs it and
//!   shares it (`Arc<ItemStore>`), so tests never see each other's items.
//! - Validation reports all bad fields at once (`ValidationFailed`), and the
//!   store itself can only fail with `StoreError::NotFound`.

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{FieldError, StoreError, ValidationFailed};
pub use store::ItemStore;
pub use types::{Item, ItemId};
