//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices on the page are whole so'm ("150 000 so'm").                    │
//! │  Storing them as i64 keeps totals exact: no 0.1 + 0.2 surprises.        │
//! │  Formatting back to "150 000" happens only at the display edge.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let shirt = Money::from_units(50_000);
//! let hat = Money::from_units(25_000);
//!
//! let total = shirt.checked_add(hat).unwrap();
//! assert_eq!(total.units(), 75_000);
//! assert_eq!(total.grouped(' '), "75 000");
//! ```
//!
//! There is no `+` operator: every addition is checked, and callers decide
//! what an overflow means.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit used by the page.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist only so validation can reject them
/// - **Single field tuple struct**: zero-cost over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Adds two values, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert!(Money::from_units(i64::MAX).checked_add(Money::from_units(1)).is_none());
    /// assert_eq!(
    ///     Money::from_units(1).checked_add(Money::from_units(2)),
    ///     Some(Money::from_units(3))
    /// );
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Sums `values`, returning `None` if any partial sum overflows.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let prices = [50_000, 25_000].map(Money::from_units);
    /// assert_eq!(Money::checked_sum(prices), Some(Money::from_units(75_000)));
    /// assert_eq!(Money::checked_sum([i64::MAX, 1].map(Money::from_units)), None);
    /// ```
    pub fn checked_sum<I>(values: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(), |acc, value| acc.checked_add(value))
    }

    /// Formats the value with thousands grouped by `separator`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(1_250_000).grouped(' '), "1 250 000");
    /// assert_eq!(Money::from_units(-5_000).grouped(','), "-5,000");
    /// assert_eq!(Money::from_units(999).grouped(' '), "999");
    /// ```
    pub fn grouped(&self, separator: char) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }

        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display groups thousands with a space, matching the page's price labels.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped(' '))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
