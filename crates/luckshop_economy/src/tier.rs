//! # Tiers
//!
//! Which generation policy a luck total earns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation policy selected by the luck total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tier {
    /// Zero luck - the shop has nothing to show, and that is not a failure.
    Closed = 0,
    /// A handful of guaranteed commons, one per point of luck.
    Low = 1,
    /// Exact-budget search, biased toward rarer items.
    Mid = 2,
    /// Five items from the top of the catalog.
    Jackpot = 3,
}

impl Tier {
    /// Lowercase name, as used in logs and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::Jackpot => "jackpot",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for tier in [Tier::Closed, Tier::Low, Tier::Mid, Tier::Jackpot] {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{tier}\""));
        }
    }
}
