//! # Basket Statistics
//!
//! Monte-Carlo tallies for tuning a policy against a real catalog: how
//! often a luck total finds a basket, how many attempts the search burns,
//! and which costs end up on the counter.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::LuckCost;
use crate::shop::StockResult;
use crate::tier::Tier;

/// Statistics from repeated stocking runs for one luck total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BasketStatistics {
    /// The luck total simulated.
    pub luck_total: u32,
    /// Its tier.
    pub tier: Tier,
    /// Total number of runs performed.
    pub runs: u64,
    /// Runs that met the tier's contract.
    pub successes: u64,
    /// Items placed across all runs.
    pub items_drawn: u64,
    /// Randomized attempts spent across all runs.
    pub attempts_spent: u64,
    /// Items placed, by luck cost.
    pub cost_counts: BTreeMap<LuckCost, u64>,
}

impl BasketStatistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new(luck_total: u32, tier: Tier) -> Self {
        Self {
            luck_total,
            tier,
            runs: 0,
            successes: 0,
            items_drawn: 0,
            attempts_spent: 0,
            cost_counts: BTreeMap::new(),
        }
    }

    /// Adds one run.
    pub fn record(&mut self, result: &StockResult<'_>) {
        self.runs += 1;
        if result.succeeded {
            self.successes += 1;
        }
        self.attempts_spent += u64::from(result.attempts);
        for item in result.basket.iter() {
            self.items_drawn += 1;
            *self.cost_counts.entry(item.luck_cost).or_insert(0) += 1;
        }
    }

    /// Returns the success rate as a percentage.
    #[must_use]
    pub fn success_rate_percent(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            (self.successes as f64 / self.runs as f64) * 100.0
        }
    }

    /// Mean items per successful basket.
    #[must_use]
    pub fn mean_basket_size(&self) -> f64 {
        if self.successes == 0 {
            0.0
        } else {
            self.items_drawn as f64 / self.successes as f64
        }
    }

    /// Mean attempts per run.
    #[must_use]
    pub fn mean_attempts(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.attempts_spent as f64 / self.runs as f64
        }
    }
}
