//! # Cart Manager
//!
//! Tracks added items and keeps the count/total view consistent.
//!
//! ## Add Item Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_item(item)                                                         │
//! │       │                                                                 │
//! │       ├── name empty / price < 0? ──► Err(InvalidItem), cart untouched  │
//! │       │                                                                 │
//! │       ├── total + price overflows? ─► Err(InvalidItem), cart untouched  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items.push(item) ──► total = Σ prices ──► listeners.item_added(event) │
//! │                                              │                          │
//! │                                              ├── count display adapter  │
//! │                                              └── notification adapter   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart never touches a rendering surface. Anything that needs to react
//! to an add subscribes a [`CartListener`].

use std::fmt;
use std::iter;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartSnapshot, LineItem};
use crate::validation::validate_line_item;

// =============================================================================
// Events
// =============================================================================

/// Published after an item has been accepted into the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAdded<'a> {
    /// The item that was just appended.
    pub item: &'a LineItem,
    /// Item count after the add.
    pub count: usize,
    /// Total after the add.
    pub total: i64,
}

/// Reacts to cart changes.
///
/// Listeners are called synchronously, in subscription order, once per
/// accepted item.
pub trait CartListener: Send {
    fn item_added(&self, event: &ItemAdded<'_>);
}

impl<F> CartListener for F
where
    F: Fn(&ItemAdded<'_>) + Send,
{
    fn item_added(&self, event: &ItemAdded<'_>) {
        self(event)
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// The session's shopping cart.
///
/// ## Invariants
/// - Items keep insertion order and are never removed
/// - `total()` always equals the sum of item prices; it is recomputed on
///   every add, never adjusted on its own
/// - A rejected add leaves items and total exactly as they were
#[derive(Default)]
pub struct CartManager {
    items: Vec<LineItem>,
    total: Money,
    listeners: Vec<Box<dyn CartListener>>,
}

impl CartManager {
    /// Creates an empty cart with no listeners.
    pub fn new() -> Self {
        CartManager::default()
    }

    /// Registers a listener for future adds.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adds an item to the end of the cart.
    ///
    /// ## Errors
    /// [`CoreError::InvalidItem`] when the name is blank, the price is
    /// negative, or the new total would not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{CartManager, LineItem};
    ///
    /// let mut cart = CartManager::new();
    /// assert!(cart.add_item(LineItem::new("", 100)).is_err());
    /// assert_eq!(cart.count(), 0);
    /// ```
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        validate_line_item(&item).map_err(CoreError::InvalidItem)?;

        // Re-summed over every item, including the new one, before anything
        // is mutated.
        let prices = self.items.iter().chain(iter::once(&item)).map(LineItem::amount);
        let total = Money::checked_sum(prices).ok_or_else(|| {
            CoreError::InvalidItem(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX - self.total.units(),
            })
        })?;

        self.items.push(item);
        self.total = total;

        let item = &self.items[self.items.len() - 1];
        debug!(
            name = %item.name,
            count = self.items.len(),
            total = self.total.units(),
            "Item added to cart"
        );

        let event = ItemAdded {
            item,
            count: self.items.len(),
            total: self.total.units(),
        };
        for listener in &self.listeners {
            listener.item_added(&event);
        }

        Ok(())
    }

    /// Current sum of item prices.
    #[inline]
    pub fn total(&self) -> i64 {
        self.total.units()
    }

    /// Current number of items.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copies the cart into a serializable snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            count: self.count(),
            total: self.total.units(),
        }
    }
}

impl fmt::Debug for CartManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.items)
            .field("total", &self.total)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
