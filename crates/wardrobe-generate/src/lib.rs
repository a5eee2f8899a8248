//! Item factory for Wardrobe.
//!
//! Validates categories, assigns category-prefixed ids, and builds items from
//! explicit fields or from random demo data.

pub mod errors;
pub mod factory;
pub mod ids;
pub mod random;

pub use errors::GenerationError;
pub use factory::{ClothesFactory, ItemFields};
pub use ids::{Clock, IdGenerator, MonotonicClock};
pub use random::{random_seed, seeded_rng};
