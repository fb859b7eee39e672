//! # Shop Setup
//!
//! Everything that happens before the first roll: read the catalog, read
//! (or default) the policy, check that the two make sense together.

use std::path::Path;

use luckshop_economy::{CatalogIndex, Shop, ShopPolicy, ShopResult, Tier, COMMON_COST};

/// A loaded catalog and a validated policy.
#[derive(Clone, Debug)]
pub struct ShopSetup {
    /// The stock.
    pub catalog: CatalogIndex,
    /// The balance numbers.
    pub policy: ShopPolicy,
}

impl ShopSetup {
    /// Loads the catalog and, if given, the policy file.
    ///
    /// Without a policy file the reference policy is used.
    ///
    /// # Errors
    ///
    /// Any loading or validation error from either file.
    pub fn load(catalog: impl AsRef<Path>, policy: Option<&Path>) -> ShopResult<Self> {
        let catalog = CatalogIndex::load(catalog)?;
        let policy = match policy {
            Some(path) => ShopPolicy::load(path)?,
            None => ShopPolicy::default(),
        };
        Ok(Self::new(catalog, policy))
    }

    /// Wraps an already loaded catalog and policy.
    #[must_use]
    pub fn new(catalog: CatalogIndex, policy: ShopPolicy) -> Self {
        let setup = Self { catalog, policy };
        for warning in setup.warnings() {
            tracing::warn!("{warning}");
        }
        setup
    }

    /// Opens the shop.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the policy does not validate.
    pub fn shop(&self) -> ShopResult<Shop<'_>> {
        Shop::new(&self.catalog, self.policy.clone())
    }

    /// Catalog gaps that will make some tiers come up empty.
    ///
    /// These are not errors: the shop still opens, it just fails more often.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.catalog.is_empty() {
            warnings.push("catalog is empty, every roll will come up empty".to_string());
            return warnings;
        }
        if self.catalog.bucket_len(COMMON_COST) == 0 {
            warnings.push(format!(
                "no items cost {COMMON_COST} luck, {} rolls will always fail",
                Tier::Low
            ));
        }
        for band in &self.policy.jackpot.bands {
            if self.catalog.items_between(band.min_cost, band.max_cost).next().is_none() {
                warnings.push(format!(
                    "no items cost {}..={} luck, {} baskets will fall back to cheaper stock",
                    band.min_cost,
                    band.max_cost,
                    Tier::Jackpot
                ));
            }
        }
        warnings
    }
}
