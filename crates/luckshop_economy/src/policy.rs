//! # Shop Policy
//!
//! Every balance number the shopkeeper uses, in one place.
//!
//! The defaults reproduce the reference behavior; a TOML file can override
//! any subset of them:
//!
//! ```toml
//! [tiers]
//! low_max = 4
//! jackpot_min = 20
//!
//! [mid]
//! attempt_budget = 200
//! weight_exponent = 3
//! floors = [
//!     { min_total = 16, floor = 5 },
//!     { min_total = 12, floor = 3 },
//! ]
//!
//! [[jackpot.bands]]
//! min_cost = 10
//! max_cost = 10
//! count = 1
//! ```
//!
//! Policies are validated before a [`crate::Shop`] accepts them, so the
//! generators can trust every number they read.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::basket::MAX_BASKET_SIZE;
use crate::catalog::{LuckCost, COMMON_COST};
use crate::error::{ShopError, ShopResult};
use crate::tier::Tier;

/// Largest accepted weighting exponent.
pub const MAX_WEIGHT_EXPONENT: u32 = 8;

/// Luck-total thresholds separating the tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierThresholds {
    /// Highest total served by the low tier.
    pub low_max: u32,
    /// Lowest total that hits the jackpot.
    pub jackpot_min: u32,
}

impl TierThresholds {
    /// Maps a luck total to its tier.
    ///
    /// `0` closes the shop, `1..=low_max` is low, `jackpot_min..` is the
    /// jackpot, everything in between is mid.
    #[inline]
    #[must_use]
    pub const fn classify(&self, luck_total: u32) -> Tier {
        if luck_total == 0 {
            Tier::Closed
        } else if luck_total >= self.jackpot_min {
            Tier::Jackpot
        } else if luck_total > self.low_max {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_max: 4,
            jackpot_min: 20,
        }
    }
}

/// One step of the mid-tier quality floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloorStep {
    /// Luck total at which this floor kicks in.
    pub min_total: u32,
    /// Minimum preferred item cost from then on.
    pub floor: LuckCost,
}

/// Mid-tier search parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MidPolicy {
    /// Randomized attempts before the search gives up.
    pub attempt_budget: u32,
    /// Cost weights are `cost ^ weight_exponent`.
    pub weight_exponent: u32,
    /// Quality floors; the step with the highest `min_total` not above the
    /// luck total wins.
    pub floors: Vec<FloorStep>,
}

impl MidPolicy {
    /// The advisory minimum item cost for a luck total.
    #[must_use]
    pub fn floor_for(&self, luck_total: u32) -> LuckCost {
        self.floors
            .iter()
            .filter(|step| step.min_total <= luck_total)
            .max_by_key(|step| step.min_total)
            .map_or(COMMON_COST, |step| step.floor)
    }
}

impl Default for MidPolicy {
    fn default() -> Self {
        Self {
            attempt_budget: 200,
            weight_exponent: 3,
            floors: vec![
                FloorStep {
                    min_total: 16,
                    floor: 5,
                },
                FloorStep {
                    min_total: 12,
                    floor: 3,
                },
            ],
        }
    }
}

/// A band of costs the jackpot draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostBand {
    /// Cheapest cost in the band (inclusive).
    pub min_cost: LuckCost,
    /// Most expensive cost in the band (inclusive).
    pub max_cost: LuckCost,
    /// Distinct items wanted from this band.
    pub count: usize,
}

impl CostBand {
    /// Creates a band.
    #[must_use]
    pub const fn new(min_cost: LuckCost, max_cost: LuckCost, count: usize) -> Self {
        Self {
            min_cost,
            max_cost,
            count,
        }
    }
}

/// Jackpot fill order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JackpotPolicy {
    /// Bands in preference order, most expensive first.
    pub bands: Vec<CostBand>,
}

impl Default for JackpotPolicy {
    fn default() -> Self {
        Self {
            bands: vec![
                // legendary
                CostBand::new(10, 10, 1),
                // epic
                CostBand::new(8, 9, 2),
                // rare
                CostBand::new(5, 7, 2),
            ],
        }
    }
}

/// The complete shop policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopPolicy {
    /// Tier thresholds.
    pub tiers: TierThresholds,
    /// Mid-tier search.
    pub mid: MidPolicy,
    /// Jackpot fill order.
    pub jackpot: JackpotPolicy,
}

impl ShopPolicy {
    /// Parses and validates a TOML policy.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed TOML, `InvalidConfig` for values that fail
    /// [`ShopPolicy::validate`].
    pub fn from_toml_str(source: &str) -> ShopResult<Self> {
        let policy: Self = toml::from_str(source).map_err(|e| ShopError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Loads and validates a TOML policy file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`ShopPolicy::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ShopResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| ShopError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let policy = Self::from_toml_str(&source).map_err(|e| match e {
            ShopError::Parse { message, .. } => ShopError::Parse {
                path: shown.clone(),
                message,
            },
            other => other,
        })?;

        tracing::info!(path = %shown, "shop policy loaded");
        Ok(policy)
    }

    /// Checks that every number is usable by the generators.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> ShopResult<()> {
        let TierThresholds {
            low_max,
            jackpot_min,
        } = self.tiers;

        if low_max == 0 {
            return Err(invalid("tiers.low_max must be at least 1"));
        }
        if low_max as usize > MAX_BASKET_SIZE {
            return Err(invalid(format!(
                "tiers.low_max {low_max} exceeds the basket size {MAX_BASKET_SIZE}"
            )));
        }
        if jackpot_min <= low_max {
            return Err(invalid(format!(
                "tiers.jackpot_min {jackpot_min} must be above tiers.low_max {low_max}"
            )));
        }

        if self.mid.attempt_budget == 0 {
            return Err(invalid("mid.attempt_budget must be at least 1"));
        }
        if self.mid.weight_exponent > MAX_WEIGHT_EXPONENT {
            return Err(invalid(format!(
                "mid.weight_exponent {} exceeds {MAX_WEIGHT_EXPONENT}",
                self.mid.weight_exponent
            )));
        }
        if let Some(step) = self.mid.floors.iter().find(|step| step.floor == 0) {
            return Err(invalid(format!(
                "mid floor for min_total {} must be at least 1",
                step.min_total
            )));
        }

        let mut total_count = 0usize;
        let mut previous: Option<&CostBand> = None;
        for band in &self.jackpot.bands {
            if band.min_cost == 0 || band.min_cost > band.max_cost {
                return Err(invalid(format!(
                    "jackpot band {}..={} is not a valid cost range",
                    band.min_cost, band.max_cost
                )));
            }
            if band.count == 0 {
                return Err(invalid(format!(
                    "jackpot band {}..={} must request at least one item",
                    band.min_cost, band.max_cost
                )));
            }
            if let Some(prev) = previous {
                if band.max_cost >= prev.min_cost {
                    return Err(invalid(format!(
                        "jackpot band {}..={} must be strictly cheaper than {}..={}",
                        band.min_cost, band.max_cost, prev.min_cost, prev.max_cost
                    )));
                }
            }
            total_count += band.count;
            previous = Some(band);
        }
        if total_count > MAX_BASKET_SIZE {
            return Err(invalid(format!(
                "jackpot bands request {total_count} items, basket holds {MAX_BASKET_SIZE}"
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ShopError {
    ShopError::InvalidConfig(message.into())
}
