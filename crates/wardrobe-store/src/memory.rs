use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use wardrobe_core::{ClothingItem, ItemRecord};

use crate::adapter::ItemStore;
use crate::error::{Result, StoreError};

/// In-process store with auto-increment semantics for items without an id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<i64, ItemRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, BTreeMap<i64, ItemRecord>> {
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    fn engine(&self) -> &'static str {
        "memory"
    }

    async fn insert_item(&self, item: &ClothingItem) -> Result<i64> {
        let mut rows = self.rows();
        let next_id = rows
            .last_key_value()
            .map_or(1, |(id, _)| id.saturating_add(1));
        let record = ItemRecord::from_item(item, next_id);
        if rows.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        let id = record.id;
        rows.insert(id, record);
        Ok(id)
    }

    async fn fetch_all_data(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.rows().values().cloned().collect())
    }

    async fn fetch_item_by_id(&self, id: i64) -> Result<Option<ItemRecord>> {
        Ok(self.rows().get(&id).cloned())
    }
}
