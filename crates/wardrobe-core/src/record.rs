use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};
use crate::item::{ClothingItem, ItemKind};

/// One row of the items table, mirroring its nine columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub category: Option<String>,
    pub size: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub material: Option<String>,
    pub sleeves: Option<bool>,
    pub style: Option<String>,
    pub length: Option<String>,
}

impl ItemRecord {
    /// Build the row for `item`, using `id` when the item has none of its own.
    pub fn from_item(item: &ClothingItem, id: i64) -> Self {
        Self {
            id: item.id.unwrap_or(id),
            category: Some(item.category().as_str().to_string()),
            size: item.size,
            color: item.color.clone(),
            price: item.price,
            material: item.material.clone(),
            sleeves: item.sleeves(),
            style: item.style().map(str::to_string),
            length: item.length().map(str::to_string),
        }
    }
}

impl TryFrom<ItemRecord> for ClothingItem {
    type Error = Error;

    /// Columns that do not belong to the row's category are dropped.
    fn try_from(record: ItemRecord) -> Result<Self> {
        let category: Category = record
            .category
            .as_deref()
            .ok_or(Error::MissingCategory(record.id))?
            .parse()?;

        let kind = match category {
            Category::Top => ItemKind::Top {
                sleeves: record.sleeves,
            },
            Category::Footwear => ItemKind::Footwear,
            Category::Headwear => ItemKind::Headwear {
                style: record.style,
            },
            Category::Bottoms => ItemKind::Bottoms {
                length: record.length,
            },
        };

        Ok(ClothingItem {
            id: Some(record.id),
            size: record.size,
            color: record.color,
            price: record.price,
            material: record.material,
            kind,
        })
    }
}
