//! # Mid Tier: Exact-Budget Search
//!
//! Bounded randomized search for a basket whose costs add up to the luck
//! total exactly.
//!
//! ## One Attempt
//!
//! ```text
//! remaining = luck_total, slots = 5
//! while remaining > 0 and slots > 0:
//!     max_pick   = remaining - (slots - 1)     # leave 1 luck per later slot
//!     candidates = costs in [floor, max_pick]  # or [1, max_pick] if none
//!     cost       = weighted pick, weight = cost ^ exponent
//!     item       = uniform pick from bucket[cost]
//! success iff remaining == 0
//! ```
//!
//! The first successful attempt wins. If the whole budget is spent without
//! a hit, the search reports failure with an empty basket; it never hands
//! back a partial sum.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::basket::{Basket, MAX_BASKET_SIZE};
use crate::catalog::{CatalogIndex, LuckCost, COMMON_COST};
use crate::policy::MidPolicy;

/// What a search produced and what it cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    /// The basket (empty on failure).
    pub basket: Basket<'a>,
    /// Attempts spent, including the successful one.
    pub attempts: u32,
    /// Whether an exact combination was found.
    pub found: bool,
}

/// Searches for a basket costing exactly `luck_total`.
pub fn search<'a, R: Rng + ?Sized>(
    policy: &MidPolicy,
    luck_total: u32,
    index: &'a CatalogIndex,
    rng: &mut R,
) -> SearchOutcome<'a> {
    if luck_total == 0 || index.is_empty() {
        return SearchOutcome {
            basket: Basket::new(),
            attempts: 0,
            found: false,
        };
    }

    let floor = policy.floor_for(luck_total);

    for attempt in 1..=policy.attempt_budget {
        if let Some(basket) = attempt_fill(policy, luck_total, floor, index, rng) {
            tracing::debug!(
                luck_total,
                floor,
                attempt,
                items = basket.len(),
                "mid-tier basket found"
            );
            return SearchOutcome {
                basket,
                attempts: attempt,
                found: true,
            };
        }
    }

    tracing::warn!(
        luck_total,
        floor,
        attempts = policy.attempt_budget,
        "no exact combination found"
    );
    SearchOutcome {
        basket: Basket::new(),
        attempts: policy.attempt_budget,
        found: false,
    }
}

/// Searches and keeps only the basket (empty on failure).
pub fn generate<'a, R: Rng + ?Sized>(
    policy: &MidPolicy,
    luck_total: u32,
    index: &'a CatalogIndex,
    rng: &mut R,
) -> Basket<'a> {
    search(policy, luck_total, index, rng).basket
}

/// One greedy fill. `None` if it ends anywhere but exactly zero.
fn attempt_fill<'a, R: Rng + ?Sized>(
    policy: &MidPolicy,
    luck_total: u32,
    floor: LuckCost,
    index: &'a CatalogIndex,
    rng: &mut R,
) -> Option<Basket<'a>> {
    let mut basket = Basket::new();
    let mut remaining = luck_total;
    let mut slots_left = MAX_BASKET_SIZE as u32;

    while remaining > 0 && slots_left > 0 {
        // A negative or zero ceiling means this attempt cannot land on zero
        let max_pick = remaining
            .checked_sub(slots_left - 1)
            .filter(|&max| max >= COMMON_COST)?;

        let cost = pick_cost(index, floor, max_pick, policy.weight_exponent, rng)?;
        let item = index.choose(cost, rng)?;

        basket.push(item);
        remaining -= cost;
        slots_left -= 1;
    }

    (remaining == 0).then_some(basket)
}

/// Chooses a cost key in `[floor, max_pick]`, relaxing to `[1, max_pick]`
/// for this pick only when nothing clears the floor.
fn pick_cost<R: Rng + ?Sized>(
    index: &CatalogIndex,
    floor: LuckCost,
    max_pick: LuckCost,
    exponent: u32,
    rng: &mut R,
) -> Option<LuckCost> {
    let mut candidates: Vec<LuckCost> = index.costs_between(floor, max_pick).collect();
    if candidates.is_empty() {
        tracing::trace!(floor, max_pick, "floor relaxed for this pick");
        candidates = index.costs_between(COMMON_COST, max_pick).collect();
    }
    choose_weighted(&candidates, exponent, rng)
}

/// Weighted pick with weight `cost ^ exponent`. `None` for no candidates.
fn choose_weighted<R: Rng + ?Sized>(
    candidates: &[LuckCost],
    exponent: u32,
    rng: &mut R,
) -> Option<LuckCost> {
    let exponent = i32::try_from(exponent).ok()?;
    let weights = candidates.iter().map(|&cost| f64::from(cost).powi(exponent));
    let distribution = WeightedIndex::new(weights).ok()?;
    candidates.get(distribution.sample(rng)).copied()
}
