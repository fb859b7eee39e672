//! # LUCKSHOP
//!
//! The counter in front of the shopkeeper's brain.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────────────────┐
//! │ customer     │──>│ input        │──>│ luckshop_economy::Shop     │
//! │ "+3"         │   │ parse_bonus  │   │ roll -> tier -> generator  │
//! └──────────────┘   └──────────────┘   └─────────────┬──────────────┘
//!                                                     │
//! ┌──────────────┐   ┌──────────────┐                 │
//! │ catalog.toml │──>│ setup        │─────────────────┘
//! │ policy.toml  │   │ ShopSetup    │        report: text / JSON
//! └──────────────┘   └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - `input`: Sanitizing what the customer typed
//! - `setup`: Catalog and policy loading
//! - `report`: Rendering rolls, baskets and statistics

pub mod input;
pub mod report;
pub mod setup;

pub use luckshop_economy as economy;

pub use input::parse_bonus;
pub use report::{vendor_message, StockReport};
pub use setup::ShopSetup;
