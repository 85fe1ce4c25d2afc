//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────┐                     │
//! │  │    LineItem     │  n..1  │    CartSnapshot     │                     │
//! │  │  ─────────────  │───────►│  ─────────────────  │                     │
//! │  │  name           │        │  items (ordered)    │                     │
//! │  │  price (units)  │        │  count, total       │                     │
//! │  └─────────────────┘        └─────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry added to the cart.
///
/// Line items are never mutated or removed once in a cart. Construction is
/// unchecked; [`CartManager::add_item`](crate::CartManager::add_item) is
/// where the rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product title as shown on the card.
    pub name: String,

    /// Price in units (non-negative once accepted by a cart).
    pub price: i64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        LineItem {
            name: name.into(),
            price,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_units(self.price)
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// A read-only copy of the cart, for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub count: usize,
    pub total: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
