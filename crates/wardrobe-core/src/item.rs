use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Category-specific part of an item.
///
/// Each variant carries exactly the attribute its category allows, so an
/// attribute can never be attached to the wrong kind of item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ItemKind {
    Top { sleeves: Option<bool> },
    Footwear,
    Headwear { style: Option<String> },
    Bottoms { length: Option<String> },
}

impl ItemKind {
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Top { .. } => Category::Top,
            ItemKind::Footwear => Category::Footwear,
            ItemKind::Headwear { .. } => Category::Headwear,
            ItemKind::Bottoms { .. } => Category::Bottoms,
        }
    }
}

/// A clothing item. Every base field may be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Option<i64>,
    pub size: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub material: Option<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl ClothingItem {
    /// Item of the given kind with all base fields unset.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            id: None,
            size: None,
            color: None,
            price: None,
            material: None,
            kind,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn sleeves(&self) -> Option<bool> {
        match &self.kind {
            ItemKind::Top { sleeves } => *sleeves,
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Headwear { style } => style.as_deref(),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Bottoms { length } => length.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_attribute_follows_kind() {
        let cap = ClothingItem::new(ItemKind::Headwear {
            style: Some("Cap".to_string()),
        });
        assert_eq!(cap.category(), Category::Headwear);
        assert_eq!(cap.style(), Some("Cap"));
        assert_eq!(cap.sleeves(), None);
        assert_eq!(cap.length(), None);
    }

    #[test]
    fn serializes_with_category_tag() {
        let item = ClothingItem::new(ItemKind::Top {
            sleeves: Some(false),
        })
        .with_id(7)
        .with_color("Red");

        let json = serde_json::to_value(&item).expect("serialize item");
        assert_eq!(json["category"], "Top");
        assert_eq!(json["sleeves"], false);
        assert_eq!(json["color"], "Red");

        let back: ClothingItem = serde_json::from_value(json).expect("deserialize item");
        assert_eq!(back, item);
    }
}
