//! # storefront-core: Pure Business Logic for the Storefront
//!
//! Everything the storefront page decides, with nothing it renders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Page (buttons, counter, toasts)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ sinks                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront-page (bootstrap, timers)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │CartManager│  │ item/form │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO TIMERS                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items and cart snapshots
//! - [`money`] - Integer money with display grouping
//! - [`cart`] - The cart manager and its listener seam
//! - [`notification`] - "Item added" message templates
//! - [`error`] - Domain error types
//! - [`validation`] - Line item and contact form rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartManager, LineItem};
//!
//! let mut cart = CartManager::new();
//! cart.add_item(LineItem::new("Shirt", 50_000)).unwrap();
//! cart.add_item(LineItem::new("Hat", 25_000)).unwrap();
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), 75_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod notification;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartListener, CartManager, ItemAdded};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notification::MessageTemplate;
pub use types::*;
