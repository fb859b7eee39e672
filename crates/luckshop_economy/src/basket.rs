//! # Basket
//!
//! The handful of items the shopkeeper lays out for one roll.

use serde::Serialize;

use crate::catalog::Item;

/// Maximum number of items in any basket.
pub const MAX_BASKET_SIZE: usize = 5;

/// Items selected for one roll, in selection order.
///
/// Holds references into the catalog buckets; nothing is copied until the
/// caller asks for owned items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Basket<'a> {
    items: Vec<&'a Item>,
}

impl<'a> Basket<'a> {
    /// Creates an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_BASKET_SIZE),
        }
    }

    /// Adds an item. Generators never exceed [`MAX_BASKET_SIZE`].
    pub(crate) fn push(&mut self, item: &'a Item) {
        debug_assert!(self.items.len() < MAX_BASKET_SIZE, "basket overflow");
        self.items.push(item);
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was selected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if no more items fit.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_BASKET_SIZE
    }

    /// Free slots left.
    #[inline]
    #[must_use]
    pub fn remaining_slots(&self) -> usize {
        MAX_BASKET_SIZE.saturating_sub(self.items.len())
    }

    /// The selected items.
    #[must_use]
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Iterates over the selected items.
    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.items.iter().copied()
    }

    /// Sum of the items' luck costs.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.luck_cost)).sum()
    }
}

impl<'a> IntoIterator for Basket<'a> {
    type Item = &'a Item;
    type IntoIter = std::vec::IntoIter<&'a Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
