//! # Catalog Index
//!
//! The shop's stock, bucketed by luck cost.
//!
//! Items are loaded once, grouped by their `luck_cost`, and never touched
//! again. Generators only hold shared references into the buckets, so one
//! index can serve any number of rolls.
//!
//! ## Bucket Ordering
//!
//! Buckets live in a `BTreeMap`, so cost keys are always walked in ascending
//! order. Seeded runs depend on this: the same seed over the same catalog
//! produces the same basket, every time.
//!
//! ## File Formats
//!
//! ```toml
//! [[items]]
//! id = 1
//! name = "Healing Herb"
//! description = "Smells of mint."
//! luck_cost = 1
//! ```
//!
//! JSON catalogs are accepted either as a bare array of items or as
//! `{ "items": [...] }`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{ShopError, ShopResult};

/// Unique identifier for a catalog item.
pub type ItemId = u32;

/// Price of an item against the luck budget.
pub type LuckCost = u32;

/// The cost every "common" item carries.
pub const COMMON_COST: LuckCost = 1;

/// A catalog item.
///
/// Only `luck_cost` matters to the generators; everything else is display data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Optional grouping label (weapon, potion, trinket...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price against the luck budget. Always at least 1.
    pub luck_cost: LuckCost,
}

impl Item {
    /// Creates an item with no description or category.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, luck_cost: LuckCost) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: None,
            luck_cost,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// On-disk catalog layout (`[[items]]` tables / `{ "items": [...] }`).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<Item>,
}

/// JSON catalogs come in two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Item>),
    Wrapped(CatalogFile),
}

/// Items grouped by luck cost.
///
/// Invariants:
/// - every indexed item sits in the bucket keyed by its own `luck_cost`
/// - no bucket is empty
/// - nothing is mutated after construction
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    buckets: BTreeMap<LuckCost, Vec<Item>>,
    item_count: usize,
}

impl CatalogIndex {
    /// Groups items by luck cost, preserving load order inside each bucket.
    ///
    /// Never fails. Records with a zero cost cannot be priced against a
    /// budget and are skipped; use [`CatalogIndex::try_build`] to reject them.
    #[must_use]
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut buckets: BTreeMap<LuckCost, Vec<Item>> = BTreeMap::new();
        let mut item_count = 0;

        for item in items {
            if item.luck_cost == 0 {
                tracing::warn!(item_id = item.id, "skipping item with zero luck cost");
                continue;
            }
            buckets.entry(item.luck_cost).or_default().push(item);
            item_count += 1;
        }

        Self {
            buckets,
            item_count,
        }
    }

    /// Validates and indexes items.
    ///
    /// # Errors
    ///
    /// - `InvalidItem` if a record has a zero luck cost or a blank name
    /// - `DuplicateItem` if two records share an id
    pub fn try_build<I>(items: I) -> ShopResult<Self>
    where
        I: IntoIterator<Item = Item>,
    {
        let items: Vec<Item> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            if item.luck_cost == 0 {
                return Err(ShopError::InvalidItem {
                    id: item.id,
                    reason: "luck_cost must be at least 1".to_string(),
                });
            }
            if item.name.trim().is_empty() {
                return Err(ShopError::InvalidItem {
                    id: item.id,
                    reason: "name must not be blank".to_string(),
                });
            }
            if !seen.insert(item.id) {
                return Err(ShopError::DuplicateItem(item.id));
            }
        }

        Ok(Self::build(items))
    }

    /// Parses and indexes a TOML catalog.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed TOML or missing fields, plus everything
    /// [`CatalogIndex::try_build`] rejects.
    pub fn from_toml_str(source: &str) -> ShopResult<Self> {
        let file: CatalogFile = toml::from_str(source).map_err(|e| ShopError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Self::try_build(file.items)
    }

    /// Parses and indexes a JSON catalog.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed JSON or missing fields, plus everything
    /// [`CatalogIndex::try_build`] rejects.
    pub fn from_json_str(source: &str) -> ShopResult<Self> {
        let catalog: JsonCatalog = serde_json::from_str(source).map_err(|e| ShopError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        let items = match catalog {
            JsonCatalog::Bare(items) => items,
            JsonCatalog::Wrapped(file) => file.items,
        };
        Self::try_build(items)
    }

    /// Loads a catalog file, picking the parser from the extension
    /// (`.json` is JSON, anything else is TOML).
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read; parse and validation errors carry
    /// the file path.
    pub fn load(path: impl AsRef<Path>) -> ShopResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| ShopError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        };

        let index = parsed.map_err(|e| match e {
            ShopError::Parse { message, .. } => ShopError::Parse {
                path: shown.clone(),
                message,
            },
            other => other,
        })?;

        tracing::info!(
            path = %shown,
            items = index.item_count(),
            buckets = index.bucket_count(),
            "catalog loaded"
        );
        Ok(index)
    }

    /// Returns true if the catalog holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Total number of indexed items.
    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of distinct luck costs.
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Items of exactly this cost (empty slice if none).
    #[must_use]
    pub fn bucket(&self, cost: LuckCost) -> &[Item] {
        self.buckets.get(&cost).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of items of exactly this cost.
    #[inline]
    #[must_use]
    pub fn bucket_len(&self, cost: LuckCost) -> usize {
        self.bucket(cost).len()
    }

    /// All cost keys, ascending.
    pub fn costs(&self) -> impl DoubleEndedIterator<Item = LuckCost> + '_ {
        self.buckets.keys().copied()
    }

    /// Cost keys in `min..=max`, ascending. Empty when `min > max`.
    pub fn costs_between(
        &self,
        min: LuckCost,
        max: LuckCost,
    ) -> impl DoubleEndedIterator<Item = LuckCost> + '_ {
        self.buckets_between(min, max).map(|(&cost, _)| cost)
    }

    /// Every item whose cost lies in `min..=max`, by ascending cost then load order.
    pub fn items_between(&self, min: LuckCost, max: LuckCost) -> impl Iterator<Item = &Item> + '_ {
        self.buckets_between(min, max).flat_map(|(_, items)| items.iter())
    }

    /// Cheapest cost present.
    #[must_use]
    pub fn lowest_cost(&self) -> Option<LuckCost> {
        self.buckets.keys().next().copied()
    }

    /// Most expensive cost present.
    #[must_use]
    pub fn highest_cost(&self) -> Option<LuckCost> {
        self.buckets.keys().next_back().copied()
    }

    /// Picks one item of this cost uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, cost: LuckCost, rng: &mut R) -> Option<&Item> {
        self.bucket(cost).choose(rng)
    }

    /// Picks up to `k` distinct items whose cost lies in `min..=max`
    /// (sampling without replacement across the whole band).
    ///
    /// Returns every item in the band, in random order, when it holds fewer
    /// than `k`. A single bucket is the band `cost..=cost`.
    pub fn sample_between<R: Rng + ?Sized>(
        &self,
        min: LuckCost,
        max: LuckCost,
        k: usize,
        rng: &mut R,
    ) -> Vec<&Item> {
        let pool: Vec<&Item> = self.items_between(min, max).collect();
        pool.choose_multiple(rng, k).copied().collect()
    }

    /// Returns true if `item` is indexed under its own cost.
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.bucket(item.luck_cost).contains(item)
    }

    fn buckets_between(
        &self,
        min: LuckCost,
        max: LuckCost,
    ) -> std::collections::btree_map::Range<'_, LuckCost, Vec<Item>> {
        // `BTreeMap::range` panics on inverted bounds
        if min <= max {
            self.buckets.range(min..=max)
        } else {
            self.buckets.range(..0)
        }
    }
}
