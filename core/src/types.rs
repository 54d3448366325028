//! Domain types for the item catalog.
//!
//! # Design
//! `Item` is both the stored value and the wire shape: the API echoes items
//! back exactly as they were submitted, without the id. `description` is
//! serialized as `null` when absent so every item has the same three keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by `ItemStore` on create.
///
/// Ids start at 1 and are never reused within a store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub const FIRST: ItemId = ItemId(1);

    pub(crate) fn next(self) -> ItemId {
        ItemId(self.0 + 1)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_missing_description_as_null() {
        let json = serde_json::to_value(Item::new("Pen", 1.5)).unwrap();
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"], 1.5);
        assert!(json["description"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn item_keeps_non_ascii_text() {
        let item = Item::new("测试商品", 99.99).with_description("d");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("测试商品"));
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn item_id_serializes_as_plain_number() {
        assert_eq!(serde_json::to_value(ItemId(7)).unwrap(), 7);
        assert_eq!(ItemId(7).to_string(), "7");
    }

    #[test]
    fn item_id_from_u64() {
        assert_eq!(ItemId::from(5), ItemId(5));
    }

    #[test]
    fn item_id_next_increments() {
        assert_eq!(ItemId::FIRST.next(), ItemId(2));
    }
}
