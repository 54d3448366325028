//! In-memory item store with id allocation.
//!
//! # Design
//! The mapping and the next-id counter live behind one `Mutex`, so concurrent
//! creates can never hand out the same id. Ids only ever grow, which means a
//! `BTreeMap` keyed by id iterates in insertion order without extra
//! bookkeeping. Critical sections never panic half-way through a mutation,
//! so a poisoned lock still guards consistent state and is recovered.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::types::{Item, ItemId};

/// Process-local collection of items keyed by `ItemId`.
#[derive(Debug)]
pub struct ItemStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: BTreeMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All items in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.lock().items.values().cloned().collect()
    }

    /// All items with their ids, in insertion order.
    pub fn records(&self) -> Vec<(ItemId, Item)> {
        self.lock()
            .items
            .iter()
            .map(|(id, item)| (*id, item.clone()))
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Store `item` under the next unused id and return that id with the
    /// stored value.
    pub fn create(&self, item: Item) -> (ItemId, Item) {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id = id.next();
        inner.items.insert(id, item.clone());
        (id, item)
    }

    /// Remove the item under `id`. The id is not recycled.
    pub fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.lock()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
