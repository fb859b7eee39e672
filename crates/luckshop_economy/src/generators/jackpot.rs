//! # Jackpot Tier
//!
//! Five items, rarest first. The luck total is not spent here; it only
//! has to be high enough to get in.
//!
//! Bands are walked in preference order. Each band is sampled without
//! replacement; a band that comes up short passes its shortfall down to the
//! next one. Whatever is still missing at the end is filled from the
//! cheapest bucket, with replacement, so any non-empty catalog yields a full
//! basket.

use rand::Rng;

use crate::basket::Basket;
use crate::catalog::CatalogIndex;
use crate::policy::JackpotPolicy;

/// Fills a jackpot basket. Empty only when the catalog is.
pub fn generate<'a, R: Rng + ?Sized>(
    policy: &JackpotPolicy,
    index: &'a CatalogIndex,
    rng: &mut R,
) -> Basket<'a> {
    let mut basket = Basket::new();

    let Some(backstop) = index.lowest_cost() else {
        tracing::warn!("jackpot requested from an empty catalog");
        return basket;
    };

    let mut wanted = 0usize;
    for band in &policy.bands {
        wanted += band.count;
        let request = wanted.min(basket.remaining_slots());
        if request == 0 {
            break;
        }

        let drawn = index.sample_between(band.min_cost, band.max_cost, request, rng);
        let drawn_count = drawn.len();
        wanted -= drawn_count;
        for item in drawn {
            basket.push(item);
        }

        tracing::debug!(
            min_cost = band.min_cost,
            max_cost = band.max_cost,
            request,
            drawn = drawn_count,
            "jackpot band drawn"
        );
    }

    if !basket.is_full() {
        tracing::debug!(
            backstop,
            missing = basket.remaining_slots(),
            "jackpot short, filling from cheapest bucket"
        );
    }
    while !basket.is_full() {
        let Some(item) = index.choose(backstop, rng) else {
            break;
        };
        basket.push(item);
    }

    basket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::MAX_BASKET_SIZE;
    use crate::catalog::Item;
    use crate::luck::seeded_rng;
    use crate::policy::CostBand;
    use std::collections::HashSet;

    fn full_catalog() -> CatalogIndex {
        CatalogIndex::build(vec![
            Item::new(1, "A", 1),
            Item::new(2, "B", 1),
            Item::new(3, "C", 2),
            Item::new(4, "D", 3),
            Item::new(5, "E", 5),
            Item::new(6, "F", 5),
            Item::new(7, "G", 8),
            Item::new(8, "H", 8),
            Item::new(9, "I", 10),
        ])
    }

    #[test]
    fn test_default_bands_fill_from_the_top() {
        let index = full_catalog();
        let mut rng = seeded_rng(21);

        for _ in 0..50 {
            let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
            let mut ids: Vec<u32> = basket.iter().map(|item| item.id).collect();
            ids.sort_unstable();
            // I (10), G+H (8), E+F (5): the whole upper catalog, once each
            assert_eq!(ids, vec![5, 6, 7, 8, 9]);
        }
    }

    #[test]
    fn test_selection_order_follows_preference() {
        let index = full_catalog();
        let mut rng = seeded_rng(22);
        let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
        let costs: Vec<u32> = basket.iter().map(|item| item.luck_cost).collect();
        assert_eq!(costs, vec![10, 8, 8, 5, 5]);
    }

    #[test]
    fn test_no_duplicates_within_bands() {
        let items = (0..30).map(|id| Item::new(id, format!("Relic {id}"), 5 + id % 6));
        let index = CatalogIndex::build(items);
        let mut rng = seeded_rng(23);

        for _ in 0..100 {
            let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
            assert_eq!(basket.len(), MAX_BASKET_SIZE);
            let unique: HashSet<u32> = basket.iter().map(|item| item.id).collect();
            assert_eq!(unique.len(), MAX_BASKET_SIZE, "{:?}", basket.items());
        }
    }

    #[test]
    fn test_shortfall_carries_to_next_band() {
        // No legendary: its slot goes to the epic band
        let index = CatalogIndex::build(vec![
            Item::new(1, "A", 1),
            Item::new(7, "G", 8),
            Item::new(8, "H", 9),
            Item::new(10, "J", 8),
            Item::new(5, "E", 5),
            Item::new(6, "F", 6),
        ]);
        let mut rng = seeded_rng(24);

        let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
        let costs: Vec<u32> = basket.iter().map(|item| item.luck_cost).collect();
        assert_eq!(basket.len(), 5);
        assert!(costs[..3].iter().all(|&c| (8..=9).contains(&c)), "{costs:?}");
        assert!(costs[3..].iter().all(|&c| (5..=6).contains(&c)), "{costs:?}");
    }

    #[test]
    fn test_backstop_fills_commons_only_catalog() {
        let index = CatalogIndex::build(vec![Item::new(1, "A", 1), Item::new(2, "B", 1)]);
        let mut rng = seeded_rng(25);

        let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
        assert_eq!(basket.len(), MAX_BASKET_SIZE);
        assert!(basket.iter().all(|item| item.luck_cost == 1));
    }

    #[test]
    fn test_backstop_is_cheapest_bucket() {
        // No cost-1 items: the backstop falls to cost 2
        let index = CatalogIndex::build(vec![Item::new(3, "C", 2), Item::new(9, "I", 10)]);
        let mut rng = seeded_rng(26);

        let basket = generate(&JackpotPolicy::default(), &index, &mut rng);
        let costs: Vec<u32> = basket.iter().map(|item| item.luck_cost).collect();
        assert_eq!(costs, vec![10, 2, 2, 2, 2]);
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::default();
        let mut rng = seeded_rng(27);
        assert!(generate(&JackpotPolicy::default(), &index, &mut rng).is_empty());
    }

    #[test]
    fn test_custom_bands() {
        let policy = JackpotPolicy {
            bands: vec![CostBand::new(8, 10, 3)],
        };
        let index = full_catalog();
        let mut rng = seeded_rng(28);

        let basket = generate(&policy, &index, &mut rng);
        let costs: Vec<u32> = basket.iter().map(|item| item.luck_cost).collect();
        assert_eq!(basket.len(), 5);
        assert!(costs[..3].iter().all(|&c| c >= 8), "{costs:?}");
        assert!(costs[3..].iter().all(|&c| c == 1), "{costs:?}");
    }
}
