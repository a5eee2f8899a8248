use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use wardrobe_core::{Category, ItemKind};

pub const SIZE_MIN: i32 = 30;
pub const SIZE_MAX: i32 = 50;
pub const PRICE_MIN: f64 = 10.0;
pub const PRICE_MAX: f64 = 100.0;

pub const COLORS: [&str; 5] = ["Red", "Blue", "Green", "Black", "White"];
pub const MATERIALS: [&str; 4] = ["Cotton", "Leather", "Wool", "Denim"];
pub const STYLES: [&str; 3] = ["Cap", "Hat", "Beanie"];
pub const LENGTHS: [&str; 3] = ["Short", "Medium", "Long"];

/// Deterministic RNG for reproducible demo batches.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fresh seed from the thread-local generator, for runs without `--seed`.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

pub fn category(rng: &mut impl Rng) -> Category {
    Category::ALL[rng.random_range(0..Category::ALL.len())]
}

pub fn size(rng: &mut impl Rng) -> i32 {
    rng.random_range(SIZE_MIN..=SIZE_MAX)
}

/// Uniform price rounded to cents.
pub fn price(rng: &mut impl Rng) -> f64 {
    let raw = rng.random_range(PRICE_MIN..=PRICE_MAX);
    (raw * 100.0).round() / 100.0
}

pub fn kind(category: Category, rng: &mut impl Rng) -> ItemKind {
    match category {
        Category::Top => ItemKind::Top {
            sleeves: Some(rng.random_bool(0.5)),
        },
        Category::Footwear => ItemKind::Footwear,
        Category::Headwear => ItemKind::Headwear {
            style: Some(pick(&STYLES, rng)),
        },
        Category::Bottoms => ItemKind::Bottoms {
            length: Some(pick(&LENGTHS, rng)),
        },
    }
}

pub fn pick(values: &[&str], rng: &mut impl Rng) -> String {
    let idx = rng.random_range(0..values.len());
    values[idx].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_two_decimals_and_stays_in_range() {
        let mut rng = seeded_rng(11);
        for _ in 0..500 {
            let value = price(&mut rng);
            assert!((PRICE_MIN..=PRICE_MAX).contains(&value));
            let cents = value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{value} has more than 2 decimals");
        }
    }

    #[test]
    fn every_category_is_reachable() {
        let mut rng = seeded_rng(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(category(&mut rng));
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }
}
