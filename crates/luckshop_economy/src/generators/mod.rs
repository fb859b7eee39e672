//! # Basket Generators
//!
//! One generator per tier:
//!
//! | Tier    | Luck total | Basket                                  |
//! |---------|------------|-----------------------------------------|
//! | Low     | 1..=4      | `total` commons, with replacement       |
//! | Mid     | 5..=19     | costs summing to `total` exactly        |
//! | Jackpot | 20..       | five items, most expensive bands first  |
//!
//! (Ranges shown for the default [`crate::policy::TierThresholds`].)
//!
//! Generators take the random source as a parameter and report failure as
//! an empty basket. None of them allocate more than a basket and a small
//! candidate list.

pub mod jackpot;
pub mod low;
pub mod mid;

pub use mid::SearchOutcome;
