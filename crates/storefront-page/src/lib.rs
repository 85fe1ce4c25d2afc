//! # storefront-page: Page Bootstrap and Presentation Glue
//!
//! Wires the storefront page's elements to the cart in `storefront-core`.
//! The page itself is reached only through the sink traits in [`surface`],
//! so any host (a browser bridge, a terminal, a test double) can drive it.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  click "Savatga" on card N                                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Catalog::line_item(N) ── title + digits of price text                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CartManager::add_item ──► ItemAdded ──┬──► CountDisplay.show_count     │
//! │                                        └──► NotificationEmitter.notify │
//! │                                                   │                     │
//! │                                   tokio task: Entering → Shown →        │
//! │                                               Leaving → removed         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`storefront`] - Builder and the page session
//! - [`catalog`] - Product cards and add-to-cart triggers
//! - [`binding`] - Cart listeners feeding the sinks
//! - [`notifier`] - Self-dismissing toasts
//! - [`surface`] - Sink traits plus in-memory implementations
//! - [`contact`] - Contact form submit flow
//! - [`chrome`] - Anchors, hover lift, search overlay, scroll-to-top
//! - [`config`] - `STOREFRONT_*` configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_page::catalog::ProductCard;
//! use storefront_page::surface::{MemoryCountDisplay, MemorySurface};
//! use storefront_page::{PageConfig, Storefront};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let display = Arc::new(MemoryCountDisplay::new());
//! let mut page = Storefront::builder(PageConfig::default())
//!     .count_display(display.clone())
//!     .notification_surface(Arc::new(MemorySurface::new()))
//!     .product_cards(vec![ProductCard::new("Shirt", "50 000 so'm", "Savatga")])
//!     .build()
//!     .unwrap();
//!
//! page.click_add_to_cart(0).unwrap();
//! assert_eq!(page.cart().total(), 50_000);
//! assert_eq!(display.current(), Some(1));
//! # }
//! ```

pub mod binding;
pub mod catalog;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod error;
pub mod notifier;
pub mod storefront;
pub mod surface;

pub use config::{ConfigError, PageConfig};
pub use error::{PageError, PageResult};
pub use notifier::{NotificationEmitter, NotificationTiming, ToastHandle};
pub use storefront::{Storefront, StorefrontBuilder};
pub use surface::{CountDisplay, NotificationSurface, ToastId, ToastPhase, ToastView};
