//! # Reports
//!
//! Text and JSON renderings of what the shop did. Nothing here touches the
//! random source.

use serde::Serialize;
use std::fmt::Write as _;

use luckshop_economy::{BasketStatistics, CatalogIndex, LuckRoll, StockResult, Tier};

/// What the vendor says when the shelves come up empty.
#[must_use]
pub fn vendor_message(luck_total: u32) -> String {
    format!(
        "The vendor searched every shelf, but fate was unkind: \
         no good combination of items turned up for a luck of {luck_total}."
    )
}

/// One visit to the shop, ready to print.
#[derive(Clone, Debug, Serialize)]
pub struct StockReport<'a> {
    /// The roll, when the luck total came from the die.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<LuckRoll>,
    /// The basket and how it was found.
    #[serde(flatten)]
    pub stock: &'a StockResult<'a>,
    /// The vendor's apology, if one is owed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> StockReport<'a> {
    /// Builds a report, adding the vendor's apology when the search failed.
    #[must_use]
    pub fn new(roll: Option<LuckRoll>, stock: &'a StockResult<'a>) -> Self {
        let message = stock.is_unlucky().then(|| vendor_message(stock.luck_total));
        Self {
            roll,
            stock,
            message,
        }
    }

    /// Pretty JSON.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable rendering.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if let Some(roll) = &self.roll {
            let _ = write!(out, "d20: {}  bonus: {:+}  luck: {}", roll.d20, roll.bonus, roll.total);
            if roll.is_natural_twenty() {
                out.push_str("  (natural 20!)");
            }
            out.push('\n');
        } else {
            let _ = writeln!(out, "luck: {}", self.stock.luck_total);
        }
        let _ = writeln!(out, "tier: {}", self.stock.tier);

        if let Some(message) = &self.message {
            let _ = writeln!(out, "\n{message}");
            return out;
        }
        if self.stock.tier == Tier::Closed {
            out.push_str("\nThe vendor shrugs. Nothing on the counter today.\n");
            return out;
        }

        out.push('\n');
        for (slot, item) in self.stock.basket.iter().enumerate() {
            let _ = write!(out, "{}. {} [{} luck]", slot + 1, item.name, item.luck_cost);
            if let Some(category) = &item.category {
                let _ = write!(out, " ({category})");
            }
            out.push('\n');
            if !item.description.is_empty() {
                let _ = writeln!(out, "   {}", item.description);
            }
        }
        let _ = writeln!(out, "\ntotal cost: {}", self.stock.basket.total_cost());
        out
    }
}

/// One line per cost bucket: cost, item count, item names.
#[must_use]
pub fn render_inventory(catalog: &CatalogIndex) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{} items in {} buckets",
        catalog.item_count(),
        catalog.bucket_count()
    );
    if let (Some(lowest), Some(highest)) = (catalog.lowest_cost(), catalog.highest_cost()) {
        let _ = write!(out, ", costs {lowest}..={highest}");
    }
    out.push('\n');
    for cost in catalog.costs() {
        let names: Vec<&str> = catalog
            .bucket(cost)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        let _ = writeln!(out, "{cost:>4} luck  x{:<3} {}", names.len(), names.join(", "));
    }
    out
}

/// Summary of a simulation run.
#[must_use]
pub fn render_statistics(stats: &BasketStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "luck {} ({} tier), {} runs", stats.luck_total, stats.tier, stats.runs);
    let _ = writeln!(out, "success rate:  {:.2}%", stats.success_rate_percent());
    let _ = writeln!(out, "basket size:   {:.2}", stats.mean_basket_size());
    let _ = writeln!(out, "attempts/run:  {:.2}", stats.mean_attempts());

    if !stats.cost_counts.is_empty() {
        out.push_str("picks by cost:\n");
        for (cost, count) in &stats.cost_counts {
            let _ = writeln!(out, "{cost:>4} luck  {count}");
        }
    }
    out
}
