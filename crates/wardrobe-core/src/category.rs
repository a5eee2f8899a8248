use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed set of clothing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Top,
    Footwear,
    Headwear,
    Bottoms,
}

impl Category {
    /// Every category, in prefix order.
    pub const ALL: [Category; 4] = [
        Category::Top,
        Category::Footwear,
        Category::Headwear,
        Category::Bottoms,
    ];

    /// Name used in the `category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Footwear => "Footwear",
            Category::Headwear => "Headwear",
            Category::Bottoms => "Bottoms",
        }
    }

    /// Leading digit of every id generated for this category.
    pub fn id_prefix(self) -> u8 {
        match self {
            Category::Top => 1,
            Category::Footwear => 2,
            Category::Headwear => 3,
            Category::Bottoms => 4,
        }
    }

    /// Column holding the category-specific attribute, if the category has one.
    pub fn extra_column(self) -> Option<&'static str> {
        match self {
            Category::Top => Some("sleeves"),
            Category::Footwear => None,
            Category::Headwear => Some("style"),
            Category::Bottoms => Some("length"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| Error::InvalidCategory(value.to_string()))
    }
}
