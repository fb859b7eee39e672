//! # The Shop
//!
//! Tier dispatch: luck total in, basket out.
//!
//! ```text
//! LuckRoll ──> TierThresholds::classify ──┬── Closed  ──> []
//!                                         ├── Low     ──> generators::low
//!                                         ├── Mid     ──> generators::mid
//!                                         └── Jackpot ──> generators::jackpot
//! ```
//!
//! Tiers never chain into each other. A mid-tier search that comes up empty
//! is reported as a failure; it is not retried as a low-tier draw, which
//! could not spend a mid-tier total inside one basket anyway.

use rand::Rng;
use serde::Serialize;

use crate::basket::{Basket, MAX_BASKET_SIZE};
use crate::catalog::CatalogIndex;
use crate::error::ShopResult;
use crate::generators::{jackpot, low, mid};
use crate::luck::LuckRoll;
use crate::policy::ShopPolicy;
use crate::stats::BasketStatistics;
use crate::tier::Tier;

/// Result of stocking the shop for one luck total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockResult<'a> {
    /// The luck total that was spent.
    pub luck_total: u32,
    /// The tier it earned.
    pub tier: Tier,
    /// The selected items (empty on failure or when closed).
    pub basket: Basket<'a>,
    /// Whether the tier's contract was met.
    pub succeeded: bool,
    /// Randomized attempts spent (mid-tier search; 1 for single-pass tiers, 0 when closed).
    pub attempts: u32,
}

impl<'a> StockResult<'a> {
    /// The zero-luck result: nothing to show, nothing wrong.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            luck_total: 0,
            tier: Tier::Closed,
            basket: Basket::new(),
            succeeded: true,
            attempts: 0,
        }
    }

    /// Returns true if the customer should be told nothing could be found.
    #[must_use]
    pub fn is_unlucky(&self) -> bool {
        !self.succeeded && self.luck_total > 0
    }
}

/// The basket generator, bound to one catalog and one policy.
///
/// Holds no mutable state, so one shop can serve any number of rolls.
#[derive(Clone, Debug)]
pub struct Shop<'c> {
    catalog: &'c CatalogIndex,
    policy: ShopPolicy,
}

impl<'c> Shop<'c> {
    /// Creates a shop after validating the policy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the policy fails [`ShopPolicy::validate`].
    pub fn new(catalog: &'c CatalogIndex, policy: ShopPolicy) -> ShopResult<Self> {
        policy.validate()?;
        Ok(Self { catalog, policy })
    }

    /// Creates a shop with the reference policy.
    #[must_use]
    pub fn with_default_policy(catalog: &'c CatalogIndex) -> Self {
        Self {
            catalog,
            policy: ShopPolicy::default(),
        }
    }

    /// The catalog being sold from.
    #[must_use]
    pub const fn catalog(&self) -> &'c CatalogIndex {
        self.catalog
    }

    /// The active policy.
    #[must_use]
    pub const fn policy(&self) -> &ShopPolicy {
        &self.policy
    }

    /// Tier earned by a luck total.
    #[inline]
    #[must_use]
    pub const fn classify(&self, luck_total: u32) -> Tier {
        self.policy.tiers.classify(luck_total)
    }

    /// Stocks the shop for a luck total.
    pub fn generate_basket<R: Rng + ?Sized>(
        &self,
        luck_total: u32,
        rng: &mut R,
    ) -> StockResult<'c> {
        let tier = self.classify(luck_total);

        let (basket, succeeded, attempts) = match tier {
            Tier::Closed => return StockResult::closed(),
            Tier::Low => {
                let basket = low::generate(luck_total, self.catalog, rng);
                let succeeded = !basket.is_empty();
                (basket, succeeded, 1)
            }
            Tier::Mid => {
                let outcome = mid::search(&self.policy.mid, luck_total, self.catalog, rng);
                (outcome.basket, outcome.found, outcome.attempts)
            }
            Tier::Jackpot => {
                let basket = jackpot::generate(&self.policy.jackpot, self.catalog, rng);
                let succeeded = basket.len() == MAX_BASKET_SIZE;
                (basket, succeeded, 1)
            }
        };

        tracing::debug!(
            luck_total,
            tier = tier.name(),
            items = basket.len(),
            succeeded,
            attempts,
            "shop stocked"
        );

        StockResult {
            luck_total,
            tier,
            basket,
            succeeded,
            attempts,
        }
    }

    /// Rolls the luck die, applies the bonus, and stocks the shop.
    pub fn roll<R: Rng + ?Sized>(&self, bonus: i32, rng: &mut R) -> (LuckRoll, StockResult<'c>) {
        let roll = LuckRoll::roll(bonus, rng);
        tracing::info!(d20 = roll.d20, bonus, total = roll.total, "luck rolled");
        let result = self.generate_basket(roll.total, rng);
        (roll, result)
    }

    /// Stocks the shop `iterations` times for one luck total and tallies the results.
    pub fn run_statistics<R: Rng + ?Sized>(
        &self,
        luck_total: u32,
        iterations: u32,
        rng: &mut R,
    ) -> BasketStatistics {
        let mut stats = BasketStatistics::new(luck_total, self.classify(luck_total));
        for _ in 0..iterations {
            stats.record(&self.generate_basket(luck_total, rng));
        }
        stats
    }
}

/// Stocks the shop for a luck total with the reference policy.
pub fn generate_basket<'c, R: Rng + ?Sized>(
    luck_total: u32,
    catalog: &'c CatalogIndex,
    rng: &mut R,
) -> StockResult<'c> {
    Shop::with_default_policy(catalog).generate_basket(luck_total, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::luck::seeded_rng;
    use crate::policy::TierThresholds;

    fn catalog() -> CatalogIndex {
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
    fn test_zero_luck_is_closed_not_failed() {
        let index = catalog();
        let mut rng = seeded_rng(1);
        let result = generate_basket(0, &index, &mut rng);

        assert_eq!(result.tier, Tier::Closed);
        assert!(result.basket.is_empty());
        assert!(result.succeeded);
        assert!(!result.is_unlucky());
    }

    #[test]
    fn test_dispatch_by_tier() {
        let index = catalog();
        let shop = Shop::with_default_policy(&index);
        let mut rng = seeded_rng(2);

        let low = shop.generate_basket(3, &mut rng);
        assert_eq!(low.tier, Tier::Low);
        assert_eq!(low.basket.len(), 3);

        let mid = shop.generate_basket(11, &mut rng);
        assert_eq!(mid.tier, Tier::Mid);
        assert_eq!(mid.basket.total_cost(), 11);
        assert!(mid.attempts >= 1);

        let jackpot = shop.generate_basket(25, &mut rng);
        assert_eq!(jackpot.tier, Tier::Jackpot);
        assert_eq!(jackpot.basket.len(), MAX_BASKET_SIZE);
        assert!(jackpot.succeeded);
    }

    #[test]
    fn test_low_failure_is_unlucky() {
        let index = CatalogIndex::build(vec![Item::new(3, "C", 2)]);
        let mut rng = seeded_rng(3);
        let result = generate_basket(2, &index, &mut rng);

        assert!(!result.succeeded);
        assert!(result.is_unlucky());
    }

    #[test]
    fn test_empty_catalog_never_panics() {
        let index = CatalogIndex::default();
        let shop = Shop::with_default_policy(&index);
        let mut rng = seeded_rng(4);

        for total in 0..30 {
            let result = shop.generate_basket(total, &mut rng);
            assert!(result.basket.is_empty(), "total {total}");
            assert_eq!(result.succeeded, total == 0, "total {total}");
        }
    }

    #[test]
    fn test_jackpot_short_basket_is_failure() {
        let index = CatalogIndex::default();
        let mut rng = seeded_rng(5);
        let result = generate_basket(30, &index, &mut rng);
        assert_eq!(result.tier, Tier::Jackpot);
        assert!(result.is_unlucky());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let index = catalog();
        let mut policy = ShopPolicy::default();
        policy.tiers = TierThresholds {
            low_max: 10,
            jackpot_min: 5,
        };
        assert!(Shop::new(&index, policy).is_err());
    }

    #[test]
    fn test_custom_thresholds() {
        let index = catalog();
        let mut policy = ShopPolicy::default();
        policy.tiers = TierThresholds {
            low_max: 2,
            jackpot_min: 12,
        };
        let shop = Shop::new(&index, policy).unwrap();
        let mut rng = seeded_rng(6);

        assert_eq!(shop.generate_basket(3, &mut rng).tier, Tier::Mid);
        assert_eq!(shop.generate_basket(12, &mut rng).tier, Tier::Jackpot);
    }

    #[test]
    fn test_roll_pipeline_is_deterministic() {
        let index = catalog();
        let shop = Shop::with_default_policy(&index);

        for seed in 0..25 {
            let (roll_a, result_a) = shop.roll(3, &mut seeded_rng(seed));
            let (roll_b, result_b) = shop.roll(3, &mut seeded_rng(seed));
            assert_eq!(roll_a, roll_b);
            assert_eq!(result_a, result_b);
            assert_eq!(result_a.luck_total, roll_a.total);
        }
    }

    #[test]
    fn test_statistics_tally() {
        let index = catalog();
        let shop = Shop::with_default_policy(&index);
        let mut rng = seeded_rng(7);

        let stats = shop.run_statistics(4, 100, &mut rng);
        assert_eq!(stats.runs, 100);
        assert_eq!(stats.successes, 100);
        assert_eq!(stats.items_drawn, 400);
        assert_eq!(stats.cost_counts.get(&1), Some(&400));
    }
}
