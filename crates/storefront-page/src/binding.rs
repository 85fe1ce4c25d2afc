//! # Cart Bindings
//!
//! Thin adapters from cart events to page sinks.
//!
//! ```text
//! CartManager::add_item ──► ItemAdded ──┬──► CountDisplayBinding ──► CountDisplay
//!                                       └──► AddedNoticeBinding  ──► NotificationEmitter
//! ```

use std::sync::Arc;

use storefront_core::{CartListener, ItemAdded, MessageTemplate};

use crate::notifier::NotificationEmitter;
use crate::surface::CountDisplay;

/// Writes the cart count to the counter element.
pub struct CountDisplayBinding {
    display: Arc<dyn CountDisplay>,
}

impl CountDisplayBinding {
    pub fn new(display: Arc<dyn CountDisplay>) -> Self {
        CountDisplayBinding { display }
    }
}

impl CartListener for CountDisplayBinding {
    fn item_added(&self, event: &ItemAdded<'_>) {
        self.display.show_count(event.count);
    }
}

/// Shows one "added to cart" toast per accepted item.
pub struct AddedNoticeBinding {
    emitter: NotificationEmitter,
    template: MessageTemplate,
}

impl AddedNoticeBinding {
    pub fn new(emitter: NotificationEmitter, template: MessageTemplate) -> Self {
        AddedNoticeBinding { emitter, template }
    }
}

impl CartListener for AddedNoticeBinding {
    fn item_added(&self, event: &ItemAdded<'_>) {
        // The toast owns its own timers; the handle is not needed here.
        let _ = self.emitter.notify(&self.template.render(&event.item.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NotificationTiming;
    use crate::surface::{MemoryCountDisplay, MemorySurface};
    use storefront_core::{CartManager, LineItem};

    #[test]
    fn test_count_binding_tracks_adds() {
        let display = Arc::new(MemoryCountDisplay::new());
        let mut cart = CartManager::new();
        cart.subscribe(CountDisplayBinding::new(display.clone()));

        cart.add_item(LineItem::new("Shirt", 50_000)).unwrap();
        cart.add_item(LineItem::new("Hat", 25_000)).unwrap();
        let _ = cart.add_item(LineItem::new("", 1));

        assert_eq!(display.history(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_binding_one_toast_per_add() {
        let surface = Arc::new(MemorySurface::new());
        let emitter =
            NotificationEmitter::new(surface.clone(), NotificationTiming::default()).unwrap();
        let mut cart = CartManager::new();
        cart.subscribe(AddedNoticeBinding::new(emitter, MessageTemplate::default()));

        cart.add_item(LineItem::new("Shirt", 50_000)).unwrap();
        cart.add_item(LineItem::new("Hat", 25_000)).unwrap();
        let _ = cart.add_item(LineItem::new("Bad", -1));

        assert_eq!(
            surface.messages(),
            vec!["Shirt savatga qo'shildi", "Hat savatga qo'shildi"]
        );
        assert_eq!(surface.mounted_total(), 2);
    }
}
