//! # Product Catalog
//!
//! Product cards as the page renders them, and the add-to-cart triggers
//! found among them.
//!
//! ## Trigger Discovery
//! ```text
//! ┌───────────────────────────┐
//! │  Klassik ko'ylak          │  ◄── title  → LineItem.name
//! │  150 000 so'm             │  ◄── price  → digits → LineItem.price
//! │  [ Savatga ]              │  ◄── button label must equal the configured
//! └───────────────────────────┘      label (after trimming) to be a trigger
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{CoreError, CoreResult, LineItem, ValidationError};
use tracing::debug;

use crate::error::{PageError, PageResult};

/// One product card on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    /// Heading text.
    pub title: String,
    /// Price label as rendered, e.g. "150 000 so'm".
    pub price_text: String,
    /// Text of the card's button.
    pub button_label: String,
}

impl ProductCard {
    pub fn new(
        title: impl Into<String>,
        price_text: impl Into<String>,
        button_label: impl Into<String>,
    ) -> Self {
        ProductCard {
            title: title.into(),
            price_text: price_text.into(),
            button_label: button_label.into(),
        }
    }
}

/// The page's product cards plus which of them carry an add trigger.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<ProductCard>,
    triggers: Vec<usize>,
}

impl Catalog {
    /// Scans `cards` for buttons labelled `add_label`.
    pub fn discover(cards: Vec<ProductCard>, add_label: &str) -> Self {
        let triggers: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.button_label.trim() == add_label)
            .map(|(i, _)| i)
            .collect();

        debug!(cards = cards.len(), triggers = triggers.len(), "Catalog scanned");
        Catalog { cards, triggers }
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Indexes of cards with an add-to-cart trigger.
    pub fn triggers(&self) -> &[usize] {
        &self.triggers
    }

    pub fn has_trigger(&self, card: usize) -> bool {
        self.triggers.contains(&card)
    }

    /// Builds the line item an add click on `card` should produce.
    ///
    /// ## Errors
    /// - [`PageError::UnknownTrigger`] if the card has no add button
    /// - [`PageError::Core`] (`InvalidItem`) if the price text has no digits
    pub fn line_item(&self, card: usize) -> PageResult<LineItem> {
        if !self.has_trigger(card) {
            return Err(PageError::UnknownTrigger(card));
        }

        let product = &self.cards[card];
        let price = parse_display_price(&product.price_text)?;
        Ok(LineItem::new(product.title.clone(), price))
    }
}

/// Reads a price from its rendered label by keeping only the ASCII digits.
///
/// Grouping separators and currency text disappear: "150 000 so'm" reads as
/// `150000`. Every digit in the label is used, so a label holding two numbers
/// reads as their concatenation.
///
/// ## Errors
/// `InvalidItem` when the label has no digits or the digits overflow `i64`.
///
/// ## Example
/// ```rust
/// use storefront_page::catalog::parse_display_price;
///
/// assert_eq!(parse_display_price("150 000 so'm").unwrap(), 150_000);
/// assert!(parse_display_price("Kelishilgan").is_err());
/// ```
pub fn parse_display_price(text: &str) -> CoreResult<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(CoreError::InvalidItem(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("no digits in {:?}", text),
        }));
    }

    digits.parse::<i64>().map_err(|_| {
        CoreError::InvalidItem(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        })
    })
}
