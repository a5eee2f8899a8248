use rand::Rng;
use tracing::debug;

use wardrobe_core::{Category, ClothingItem, ItemKind};

use crate::errors::GenerationError;
use crate::ids::{Clock, IdGenerator, MonotonicClock};
use crate::random;

/// Caller-provided attributes for an explicitly built item.
///
/// Nothing is validated beyond the category-specific attributes: `sleeves`
/// is only accepted for tops, `style` for headwear and `length` for bottoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub size: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub material: Option<String>,
    pub sleeves: Option<bool>,
    pub style: Option<String>,
    pub length: Option<String>,
}

/// Builds validated, identified clothing items.
#[derive(Debug)]
pub struct ClothesFactory<C = MonotonicClock> {
    ids: IdGenerator<C>,
}

impl ClothesFactory<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }
}

impl Default for ClothesFactory<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ClothesFactory<C> {
    pub fn with_ids(ids: IdGenerator<C>) -> Self {
        Self { ids }
    }

    /// Build an item of the named category from `fields`.
    pub fn create(
        &self,
        category: &str,
        fields: ItemFields,
    ) -> Result<ClothingItem, GenerationError> {
        let category: Category = category
            .parse()
            .map_err(|_| GenerationError::InvalidCategory(category.to_string()))?;
        self.create_category(category, fields)
    }

    pub fn create_category(
        &self,
        category: Category,
        fields: ItemFields,
    ) -> Result<ClothingItem, GenerationError> {
        let ItemFields {
            size,
            color,
            price,
            material,
            sleeves,
            style,
            length,
        } = fields;

        let unexpected = |attribute| GenerationError::UnexpectedAttribute {
            category,
            attribute,
        };
        if sleeves.is_some() && category != Category::Top {
            return Err(unexpected("sleeves"));
        }
        if style.is_some() && category != Category::Headwear {
            return Err(unexpected("style"));
        }
        if length.is_some() && category != Category::Bottoms {
            return Err(unexpected("length"));
        }

        let kind = match category {
            Category::Top => ItemKind::Top { sleeves },
            Category::Footwear => ItemKind::Footwear,
            Category::Headwear => ItemKind::Headwear { style },
            Category::Bottoms => ItemKind::Bottoms { length },
        };

        let id = self.generate_id(category)?;
        debug!(event = "item_created", id, category = %category);

        Ok(ClothingItem {
            id: Some(id),
            size,
            color,
            price,
            material,
            kind,
        })
    }

    pub fn generate_id(&self, category: Category) -> Result<i64, GenerationError> {
        self.ids.generate(category)
    }

    /// Build a fully populated item from random demo values.
    pub fn create_random(&self, rng: &mut impl Rng) -> Result<ClothingItem, GenerationError> {
        let category = random::category(rng);
        let size = random::size(rng);
        let color = random::pick(&random::COLORS, rng);
        let price = random::price(rng);
        let material = random::pick(&random::MATERIALS, rng);
        let kind = random::kind(category, rng);

        let item = ClothingItem {
            id: Some(self.generate_id(category)?),
            size: Some(size),
            color: Some(color),
            price: Some(price),
            material: Some(material),
            kind,
        };
        debug!(event = "random_item_created", id = item.id, category = %category);
        Ok(item)
    }

    pub fn create_random_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<ClothingItem>, GenerationError> {
        (0..count).map(|_| self.create_random(rng)).collect()
    }
}
