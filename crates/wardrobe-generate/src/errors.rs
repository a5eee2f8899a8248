use thiserror::Error;

use wardrobe_core::Category;

/// Errors emitted by the item factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid item type: {0}")]
    InvalidCategory(String),
    #[error("{category} items have no '{attribute}' attribute")]
    UnexpectedAttribute {
        category: Category,
        attribute: &'static str,
    },
    #[error("id for {category} at tick {tick} does not fit in a signed 64-bit integer")]
    IdOverflow { category: Category, tick: u64 },
}

