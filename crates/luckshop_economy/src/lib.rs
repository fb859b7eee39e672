//! # LUCKSHOP Economy
//!
//! Pure Rust basket generation for a luck-driven tabletop shop.
//!
//! A customer rolls a d20, adds a bonus, and the shop turns that luck total
//! into a basket of at most five items drawn from a catalog where every item
//! carries a fixed luck cost.
//!
//! ## Design Principles
//!
//! 1. **Immutable catalog** - Built once, bucketed by cost, shared by reference
//! 2. **Injected randomness** - Every generator takes `&mut impl Rng`
//! 3. **Failure is data** - Generation never errors; it returns an empty basket
//! 4. **External configuration** - Thresholds, floors and bands live in TOML
//!
//! ## Tiers
//!
//! | Luck total | Tier    | Basket                              |
//! |------------|---------|-------------------------------------|
//! | 0          | Closed  | empty, not a failure                |
//! | 1..=4      | Low     | `total` commons                     |
//! | 5..=19     | Mid     | costs summing to `total` exactly    |
//! | 20..       | Jackpot | five items, highest cost bands first |
//!
//! ## Example
//!
//! ```rust,ignore
//! use luckshop_economy::{CatalogIndex, Shop, ShopPolicy, seeded_rng};
//!
//! let catalog = CatalogIndex::load("data/catalog.toml")?;
//! let shop = Shop::new(&catalog, ShopPolicy::load("data/policy.toml")?)?;
//!
//! let mut rng = seeded_rng(42);
//! let (roll, result) = shop.roll(2, &mut rng);
//! for item in result.basket.iter() {
//!     println!("{} ({})", item.name, item.luck_cost);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod basket;
pub mod catalog;
pub mod error;
pub mod generators;
pub mod luck;
pub mod policy;
pub mod shop;
pub mod stats;
pub mod tier;

pub use basket::{Basket, MAX_BASKET_SIZE};
pub use catalog::{CatalogIndex, Item, ItemId, LuckCost, COMMON_COST};
pub use error::{ShopError, ShopResult};
pub use generators::SearchOutcome;
pub use luck::{entropy_rng, luck_total, roll_d20, seeded_rng, LuckRoll, ShopRng, D20_SIDES};
pub use policy::{CostBand, FloorStep, JackpotPolicy, MidPolicy, ShopPolicy, TierThresholds};
pub use shop::{generate_basket, Shop, StockResult};
pub use stats::BasketStatistics;
pub use tier::Tier;
