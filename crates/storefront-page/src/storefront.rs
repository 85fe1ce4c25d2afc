//! # Storefront Bootstrap
//!
//! One `Storefront` per page session. It owns the cart and wires every
//! page event to the component that handles it.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Builder receives config, sinks, product cards, section ids          │
//! │  2. Missing count display / notification surface ─► fail fast          │
//! │  3. NotificationEmitter bound to the running tokio runtime              │
//! │  4. CartManager created; count + notice bindings subscribed             │
//! │  5. Catalog scanned for add-to-cart triggers                            │
//! │  6. Contact form, anchors, hover, search, scroll-to-top initialised     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping the storefront (page unload) cancels every pending toast.

use std::sync::Arc;

use storefront_core::validation::ContactField;
use storefront_core::{CartManager, LineItem};
use tracing::{info, warn};

use crate::binding::{AddedNoticeBinding, CountDisplayBinding};
use crate::catalog::{Catalog, ProductCard};
use crate::chrome::{
    AnchorNavigator, CardStyle, HoverLift, OverlayClick, ScrollRequest, ScrollToTop, SearchOverlay,
};
use crate::config::PageConfig;
use crate::contact::{ContactForm, SubmitOutcome};
use crate::error::{PageError, PageResult};
use crate::notifier::NotificationEmitter;
use crate::surface::{CountDisplay, NotificationSurface};

// =============================================================================
// Builder
// =============================================================================

/// Collects the page's collaborators before the storefront starts.
pub struct StorefrontBuilder {
    config: PageConfig,
    count_display: Option<Arc<dyn CountDisplay>>,
    surface: Option<Arc<dyn NotificationSurface>>,
    cards: Vec<ProductCard>,
    sections: Vec<String>,
}

impl StorefrontBuilder {
    pub fn new(config: PageConfig) -> Self {
        StorefrontBuilder {
            config,
            count_display: None,
            surface: None,
            cards: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// The cart counter element.
    pub fn count_display(mut self, display: Arc<dyn CountDisplay>) -> Self {
        self.count_display = Some(display);
        self
    }

    /// Where toasts are mounted.
    pub fn notification_surface(mut self, surface: Arc<dyn NotificationSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn product_cards(mut self, cards: Vec<ProductCard>) -> Self {
        self.cards = cards;
        self
    }

    /// Ids of sections reachable through `#id` links.
    pub fn sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Wires everything together.
    ///
    /// ## Errors
    /// - [`PageError::MissingCollaborator`] if a sink was not supplied
    /// - [`PageError::NoRuntime`] outside a tokio runtime
    pub fn build(self) -> PageResult<Storefront> {
        let display = self
            .count_display
            .ok_or(PageError::MissingCollaborator("count display"))?;
        let surface = self
            .surface
            .ok_or(PageError::MissingCollaborator("notification surface"))?;

        let emitter = NotificationEmitter::new(surface, self.config.timing())?;

        let mut cart = CartManager::new();
        cart.subscribe(CountDisplayBinding::new(Arc::clone(&display)));
        cart.subscribe(AddedNoticeBinding::new(
            emitter.clone(),
            self.config.added_template.clone(),
        ));
        display.show_count(cart.count());

        let catalog = Catalog::discover(self.cards, &self.config.add_button_label);

        info!(
            products = catalog.cards().len(),
            triggers = catalog.triggers().len(),
            sections = self.sections.len(),
            "Storefront ready"
        );

        Ok(Storefront {
            cart,
            emitter,
            catalog,
            contact: ContactForm::new(),
            anchors: AnchorNavigator::new(self.sections),
            hover: HoverLift::new(self.config.hover_lift_px),
            search: SearchOverlay::new(),
            scroll_top: ScrollToTop::new(self.config.scroll_top_threshold),
            config: self.config,
        })
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// The page session.
#[derive(Debug)]
pub struct Storefront {
    config: PageConfig,
    cart: CartManager,
    emitter: NotificationEmitter,
    catalog: Catalog,
    contact: ContactForm,
    anchors: AnchorNavigator,
    hover: HoverLift,
    search: SearchOverlay,
    scroll_top: ScrollToTop,
}

impl Storefront {
    pub fn builder(config: PageConfig) -> StorefrontBuilder {
        StorefrontBuilder::new(config)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Handles a click on the add-to-cart button of `card`.
    pub fn click_add_to_cart(&mut self, card: usize) -> PageResult<()> {
        let item = self.catalog.line_item(card).inspect_err(|err| {
            warn!(card, error = %err, "Add to cart rejected");
        })?;
        self.add_item(item)
    }

    /// Adds an already-built item.
    pub fn add_item(&mut self, item: LineItem) -> PageResult<()> {
        self.cart.add_item(item).map_err(|err| {
            warn!(error = %err, "Add to cart rejected");
            PageError::from(err)
        })
    }

    /// Read-only cart access.
    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pending toasts.
    pub fn pending_notifications(&self) -> usize {
        self.emitter.live_count()
    }

    // -------------------------------------------------------------------------
    // Contact form
    // -------------------------------------------------------------------------

    pub fn fill_contact(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value);
    }

    pub fn submit_contact(&mut self) -> SubmitOutcome {
        self.contact.submit()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    // -------------------------------------------------------------------------
    // Cosmetics
    // -------------------------------------------------------------------------

    pub fn follow_anchor(&self, href: &str) -> Option<ScrollRequest> {
        self.anchors.follow(href)
    }

    /// Pointer entered product card `card`.
    pub fn hover_enter(&mut self, card: usize) -> PageResult<CardStyle> {
        self.check_card(card)?;
        Ok(self.hover.enter(card))
    }

    pub fn hover_leave(&mut self, card: usize) -> PageResult<CardStyle> {
        self.check_card(card)?;
        Ok(self.hover.leave(card))
    }

    fn check_card(&self, card: usize) -> PageResult<()> {
        if card < self.catalog.cards().len() {
            Ok(())
        } else {
            Err(PageError::UnknownCard(card))
        }
    }

    pub fn open_search(&mut self) {
        self.search.open();
    }

    pub fn close_search(&mut self) {
        self.search.close();
    }

    pub fn click_search_overlay(&mut self, target: OverlayClick) {
        self.search.click(target);
    }

    pub fn search_open(&self) -> bool {
        self.search.is_open()
    }

    /// Page scrolled to `offset`; returns true if the scroll-to-top button
    /// changed visibility.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.scroll_top.on_scroll(offset)
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top.is_visible()
    }

    pub fn click_scroll_top(&self) -> ScrollRequest {
        self.scroll_top.click()
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Cancels pending toasts, e.g. before the surface is removed.
    pub fn teardown(&self) -> usize {
        self.emitter.dispose_all()
    }
}

impl Drop for Storefront {
    fn drop(&mut self) {
        self.emitter.dispose_all();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryCountDisplay, MemorySurface, ToastPhase};
    use std::time::Duration;
    use tokio::time::sleep;

    struct Page {
        display: Arc<MemoryCountDisplay>,
        surface: Arc<MemorySurface>,
        storefront: Storefront,
    }

    fn page() -> Page {
        let display = Arc::new(MemoryCountDisplay::new());
        let surface = Arc::new(MemorySurface::new());
        let storefront = Storefront::builder(PageConfig::default())
            .count_display(display.clone())
            .notification_surface(surface.clone())
            .product_cards(vec![
                ProductCard::new("Shirt", "50 000 so'm", "Savatga"),
                ProductCard::new("Hat", "25 000 so'm", "Savatga"),
                ProductCard::new("Gift card", "Narxi kelishiladi", "Savatga"),
                ProductCard::new("Lookbook", "0", "Ko'rish"),
            ])
            .sections(["products", "contact"])
            .build()
            .unwrap();
        Page {
            display,
            surface,
            storefront,
        }
    }

    #[test]
    fn test_build_requires_count_display() {
        let err = Storefront::builder(PageConfig::default())
            .notification_surface(Arc::new(MemorySurface::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, PageError::MissingCollaborator("count display")));
    }

    #[test]
    fn test_build_requires_surface() {
        let err = Storefront::builder(PageConfig::default())
            .count_display(Arc::new(MemoryCountDisplay::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, PageError::MissingCollaborator("notification surface")));
    }

    #[test]
    fn test_build_requires_runtime() {
        let err = Storefront::builder(PageConfig::default())
            .count_display(Arc::new(MemoryCountDisplay::new()))
            .notification_surface(Arc::new(MemorySurface::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, PageError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shirt_then_hat_from_cards() {
        let mut page = page();
        assert_eq!(page.display.current(), Some(0));

        page.storefront.click_add_to_cart(0).unwrap();
        assert_eq!(page.storefront.cart().count(), 1);
        assert_eq!(page.storefront.cart().total(), 50_000);

        page.storefront.click_add_to_cart(1).unwrap();
        assert_eq!(page.storefront.cart().count(), 2);
        assert_eq!(page.storefront.cart().total(), 75_000);

        assert_eq!(page.display.history(), vec![0, 1, 2]);
        assert_eq!(
            page.surface.messages(),
            vec!["Shirt savatga qo'shildi", "Hat savatga qo'shildi"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_clicks_change_nothing() {
        let mut page = page();
        page.storefront.click_add_to_cart(0).unwrap();

        assert!(page.storefront.click_add_to_cart(2).unwrap_err().is_invalid_item());
        assert!(matches!(
            page.storefront.click_add_to_cart(3),
            Err(PageError::UnknownTrigger(3))
        ));
        assert!(page
            .storefront
            .add_item(LineItem::new("", 100))
            .unwrap_err()
            .is_invalid_item());

        assert_eq!(page.storefront.cart().count(), 1);
        assert_eq!(page.storefront.cart().total(), 50_000);
        assert_eq!(page.display.history(), vec![0, 1]);
        assert_eq!(page.surface.mounted_total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_dismiss_independently() {
        let mut page = page();

        page.storefront.click_add_to_cart(0).unwrap();
        sleep(Duration::from_millis(2000)).await;
        page.storefront.click_add_to_cart(1).unwrap();
        assert_eq!(page.storefront.pending_notifications(), 2);

        sleep(Duration::from_millis(1600)).await; // t = 3600
        assert_eq!(page.surface.messages(), vec!["Hat savatga qo'shildi"]);
        assert_eq!(page.surface.toasts()[0].phase, ToastPhase::Shown);

        sleep(Duration::from_millis(2000)).await; // t = 5600
        assert!(page.surface.toasts().is_empty());
        assert_eq!(page.storefront.pending_notifications(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_outside_catalog_is_rejected() {
        let mut page = page();

        assert!(matches!(page.storefront.hover_enter(4), Err(PageError::UnknownCard(4))));
        assert!(matches!(
            page.storefront.hover_leave(usize::MAX),
            Err(PageError::UnknownCard(usize::MAX))
        ));
        for card in 0..4 {
            page.storefront.hover_enter(card).unwrap();
        }

        assert_eq!(page.storefront.hover.styled_cards(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_toasts() {
        let Page {
            surface,
            mut storefront,
            ..
        } = page();

        storefront.click_add_to_cart(0).unwrap();
        drop(storefront);

        assert!(surface.toasts().is_empty());
        sleep(Duration::from_millis(5000)).await;
        assert_eq!(surface.removed_total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_and_cosmetics_leave_cart_alone() {
        let mut page = page();

        page.storefront.fill_contact(ContactField::Name, "Ali");
        page.storefront.fill_contact(ContactField::Email, "ali@example.uz");
        page.storefront.fill_contact(ContactField::Message, "Salom");
        assert!(page.storefront.submit_contact().is_accepted());

        assert!(page.storefront.follow_anchor("#contact").is_some());
        assert!(page.storefront.follow_anchor("#nowhere").is_none());
        assert_eq!(page.storefront.hover_enter(0).unwrap().translate_y, -5);
        assert_eq!(page.storefront.hover_leave(0).unwrap().translate_y, 0);

        page.storefront.open_search();
        assert!(page.storefront.search_open());
        page.storefront.click_search_overlay(OverlayClick::Backdrop);
        assert!(!page.storefront.search_open());

        assert!(page.storefront.on_scroll(450));
        assert!(page.storefront.scroll_top_visible());

        assert!(page.storefront.cart().is_empty());
        assert_eq!(page.surface.mounted_total(), 0);
        assert_eq!(page.display.history(), vec![0]);
    }
}
