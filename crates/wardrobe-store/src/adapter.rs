use async_trait::async_trait;

use wardrobe_core::{ClothingItem, ItemRecord};

use crate::error::Result;

/// Trait implemented by backends that persist clothing items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns the engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// Persist `item` and return the id it was stored under.
    async fn insert_item(&self, item: &ClothingItem) -> Result<i64>;

    /// Every stored row, ordered by id.
    async fn fetch_all_data(&self) -> Result<Vec<ItemRecord>>;

    async fn fetch_item_by_id(&self, id: i64) -> Result<Option<ItemRecord>>;
}
