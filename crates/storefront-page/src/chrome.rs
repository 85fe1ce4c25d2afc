//! Cosmetic page behaviour: anchor scrolling, card hover lift, the search
//! overlay and the scroll-to-top button. None of it touches the cart.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

// =============================================================================
// Scrolling
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum ScrollTarget {
    Top,
    Section(String),
}

/// A scroll the host should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub smooth: bool,
    /// Align the target with the top of the viewport.
    pub align_start: bool,
}

/// Resolves in-page `#id` links to smooth scrolls.
#[derive(Debug, Clone, Default)]
pub struct AnchorNavigator {
    sections: HashSet<String>,
}

impl AnchorNavigator {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnchorNavigator {
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the scroll for `href`, or `None` when it is not an in-page
    /// link or names no section.
    pub fn follow(&self, href: &str) -> Option<ScrollRequest> {
        let id = href.strip_prefix('#')?;
        if !self.sections.contains(id) {
            return None;
        }

        Some(ScrollRequest {
            target: ScrollTarget::Section(id.to_string()),
            smooth: true,
            align_start: true,
        })
    }
}

/// Shows the scroll-to-top button once the page is scrolled far enough.
#[derive(Debug, Clone)]
pub struct ScrollToTop {
    threshold: u32,
    visible: bool,
}

impl ScrollToTop {
    pub fn new(threshold: u32) -> Self {
        ScrollToTop {
            threshold,
            visible: false,
        }
    }

    /// Updates visibility for the page offset. Returns true if it changed.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn click(&self) -> ScrollRequest {
        ScrollRequest {
            target: ScrollTarget::Top,
            smooth: true,
            align_start: true,
        }
    }
}

// =============================================================================
// Hover Lift
// =============================================================================

/// Inline style applied to a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardStyle {
    /// Vertical offset in px; negative moves up.
    pub translate_y: i32,
    /// Transition set on first hover and kept afterwards.
    pub transition: Option<&'static str>,
}

pub const HOVER_TRANSITION: &str = "transform 0.3s ease";

/// Raises product cards while the pointer is over them.
#[derive(Debug, Clone)]
pub struct HoverLift {
    lift_px: i32,
    styles: HashMap<usize, CardStyle>,
}

impl HoverLift {
    pub fn new(lift_px: u32) -> Self {
        HoverLift {
            lift_px: i32::try_from(lift_px).unwrap_or(i32::MAX),
            styles: HashMap::new(),
        }
    }

    pub fn enter(&mut self, card: usize) -> CardStyle {
        let style = CardStyle {
            translate_y: -self.lift_px,
            transition: Some(HOVER_TRANSITION),
        };
        self.styles.insert(card, style);
        style
    }

    /// Only cards that were hovered before keep an entry.
    pub fn leave(&mut self, card: usize) -> CardStyle {
        match self.styles.get_mut(&card) {
            Some(style) => {
                style.translate_y = 0;
                *style
            }
            None => CardStyle::default(),
        }
    }

    /// Number of cards that have a style applied.
    pub fn styled_cards(&self) -> usize {
        self.styles.len()
    }

    pub fn style(&self, card: usize) -> CardStyle {
        self.styles.get(&card).copied().unwrap_or_default()
    }
}

// =============================================================================
// Search Overlay
// =============================================================================

/// What a click inside the open overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed backdrop itself.
    Backdrop,
    /// Anything inside the search panel.
    Panel,
}

/// Full-screen search overlay; starts hidden.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    open: bool,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search icon clicked.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close button clicked.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Click inside the overlay. Only backdrop clicks close it.
    pub fn click(&mut self, target: OverlayClick) {
        if target == OverlayClick::Backdrop {
            self.open = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_navigation() {
        let nav = AnchorNavigator::new(["products", "contact"]);

        assert_eq!(
            nav.follow("#contact"),
            Some(ScrollRequest {
                target: ScrollTarget::Section("contact".to_string()),
                smooth: true,
                align_start: true,
            })
        );
        assert_eq!(nav.follow("#missing"), None);
        assert_eq!(nav.follow("#"), None);
        assert_eq!(nav.follow("/about"), None);
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        let mut button = ScrollToTop::new(300);
        assert!(!button.is_visible());

        assert!(!button.on_scroll(300));
        assert!(button.on_scroll(301));
        assert!(button.is_visible());
        assert!(!button.on_scroll(900));
        assert!(button.on_scroll(0));
        assert!(!button.is_visible());

        assert_eq!(button.click().target, ScrollTarget::Top);
    }

    #[test]
    fn test_hover_lift() {
        let mut hover = HoverLift::new(5);
        assert_eq!(hover.style(0), CardStyle::default());

        let lifted = hover.enter(0);
        assert_eq!(lifted.translate_y, -5);
        assert_eq!(lifted.transition, Some(HOVER_TRANSITION));

        let rested = hover.leave(0);
        assert_eq!(rested.translate_y, 0);
        assert_eq!(rested.transition, Some(HOVER_TRANSITION));
        assert_eq!(hover.style(1), CardStyle::default());

        assert_eq!(hover.leave(7), CardStyle::default());
        assert_eq!(hover.styled_cards(), 1);
    }

    #[test]
    fn test_search_overlay() {
        let mut overlay = SearchOverlay::new();
        assert!(!overlay.is_open());

        overlay.open();
        overlay.click(OverlayClick::Panel);
        assert!(overlay.is_open());

        overlay.click(OverlayClick::Backdrop);
        assert!(!overlay.is_open());

        overlay.open();
        overlay.close();
        assert!(!overlay.is_open());
    }
}
