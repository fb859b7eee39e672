//! # Shop Error Types
//!
//! Errors raised while loading catalogs and shop policies.
//!
//! The generators themselves never fail with an error: an empty basket is
//! the failure signal there. Everything in this module happens at the edge,
//! before the first roll.

use thiserror::Error;

use crate::catalog::ItemId;

/// Errors that can occur while preparing the shop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// A catalog or policy file could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The file that failed.
        path: String,
        /// The underlying I/O error, rendered.
        message: String,
    },

    /// A catalog or policy file is not valid TOML/JSON for its schema.
    #[error("cannot parse {path}: {message}")]
    Parse {
        /// The file (or `<inline>`) that failed.
        path: String,
        /// The parser's complaint.
        message: String,
    },

    /// A catalog record is structurally valid but unusable.
    #[error("invalid item {id}: {reason}")]
    InvalidItem {
        /// The offending item.
        id: ItemId,
        /// What is wrong with it.
        reason: String,
    },

    /// Two catalog records share an identifier.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// Invalid shop policy.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for shop setup operations.
pub type ShopResult<T> = Result<T, ShopError>;
