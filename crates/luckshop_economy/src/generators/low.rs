//! Low tier: one guaranteed common per point of luck.

use rand::Rng;

use crate::basket::{Basket, MAX_BASKET_SIZE};
use crate::catalog::{CatalogIndex, COMMON_COST};

/// Draws `luck_total` commons, independently and with replacement.
///
/// Returns an empty basket if the catalog has no cost-1 items, or if the
/// total would not fit in a basket.
pub fn generate<'a, R: Rng + ?Sized>(
    luck_total: u32,
    index: &'a CatalogIndex,
    rng: &mut R,
) -> Basket<'a> {
    let mut basket = Basket::new();

    let Ok(count) = usize::try_from(luck_total) else {
        return basket;
    };
    if count > MAX_BASKET_SIZE {
        tracing::warn!(luck_total, "low tier asked for more items than a basket holds");
        return basket;
    }
    if index.bucket_len(COMMON_COST) == 0 {
        tracing::warn!(luck_total, "no common items in catalog");
        return basket;
    }

    for _ in 0..count {
        if let Some(item) = index.choose(COMMON_COST, rng) {
            basket.push(item);
        }
    }

    basket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::luck::seeded_rng;

    fn catalog() -> CatalogIndex {
        CatalogIndex::build(vec![
            Item::new(1, "Rope", 1),
            Item::new(2, "Torch", 1),
            Item::new(3, "Lantern", 2),
        ])
    }

    #[test]
    fn test_one_common_per_luck() {
        let index = catalog();
        let mut rng = seeded_rng(5);

        for total in 1..=4 {
            let basket = generate(total, &index, &mut rng);
            assert_eq!(basket.len(), total as usize);
            assert!(basket.iter().all(|item| item.luck_cost == 1));
            assert_eq!(basket.total_cost(), u64::from(total));
        }
    }

    #[test]
    fn test_zero_luck_is_empty() {
        let index = catalog();
        let mut rng = seeded_rng(5);
        assert!(generate(0, &index, &mut rng).is_empty());
    }

    #[test]
    fn test_missing_commons_fails() {
        let index = CatalogIndex::build(vec![Item::new(3, "Lantern", 2)]);
        let mut rng = seeded_rng(5);
        assert!(generate(2, &index, &mut rng).is_empty());
    }

    #[test]
    fn test_oversized_request_fails() {
        let index = catalog();
        let mut rng = seeded_rng(5);
        assert!(generate(6, &index, &mut rng).is_empty());
    }

    #[test]
    fn test_draws_with_replacement() {
        let index = CatalogIndex::build(vec![Item::new(1, "Rope", 1)]);
        let mut rng = seeded_rng(5);
        let basket = generate(4, &index, &mut rng);
        assert_eq!(basket.len(), 4);
        assert!(basket.iter().all(|item| item.id == 1));
    }
}
