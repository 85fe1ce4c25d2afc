//! # Notification Messages
//!
//! Templates for the text shown when an item lands in the cart. Showing and
//! dismissing the message is the page layer's job; this module only decides
//! what it says.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};

/// Placeholder replaced with the item name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Default "added to cart" message.
pub const DEFAULT_ADDED_TEMPLATE: &str = "{name} savatga qo'shildi";

/// A message template with at least one `{name}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Parses a template.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::MessageTemplate;
    ///
    /// let template = MessageTemplate::parse("{name} added").unwrap();
    /// assert_eq!(template.render("Hat"), "Hat added");
    ///
    /// assert!(MessageTemplate::parse("added").is_err());
    /// ```
    pub fn parse(template: impl Into<String>) -> CoreResult<Self> {
        let template = template.into();

        if !template.contains(NAME_PLACEHOLDER) {
            return Err(ValidationError::InvalidFormat {
                field: "template".to_string(),
                reason: format!("must contain {}", NAME_PLACEHOLDER),
            }
            .into());
        }

        Ok(MessageTemplate(template))
    }

    /// Fills every placeholder with `name`.
    pub fn render(&self, name: &str) -> String {
        self.0.replace(NAME_PLACEHOLDER, name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        MessageTemplate(DEFAULT_ADDED_TEMPLATE.to_string())
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MessageTemplate {
    type Error = crate::error::CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MessageTemplate::parse(value)
    }
}

impl From<MessageTemplate> for String {
    fn from(template: MessageTemplate) -> Self {
        template.0
    }
}
