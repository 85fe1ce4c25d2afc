//! # Page Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file), matching the live page
//!
//! Configuration is read once when the storefront is built and never
//! changes afterwards.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::{MessageTemplate, Money};

use crate::notifier::NotificationTiming;

/// Storefront page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Button text that marks an add-to-cart trigger.
    pub add_button_label: String,

    /// Message shown when an item is added.
    pub added_template: MessageTemplate,

    /// Delay before a toast slides in.
    pub toast_enter_ms: u64,

    /// Time from creation until a toast starts sliding out.
    pub toast_display_ms: u64,

    /// Slide-out duration before the toast is removed.
    pub toast_exit_ms: u64,

    /// Page offset (px) above which the scroll-to-top button shows.
    pub scroll_top_threshold: u32,

    /// How far a hovered product card rises (px).
    pub hover_lift_px: u32,

    /// Appended to formatted prices.
    pub currency_suffix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            add_button_label: "Savatga".to_string(),
            added_template: MessageTemplate::default(),
            toast_enter_ms: 100,
            toast_display_ms: 3000,
            toast_exit_ms: 500,
            scroll_top_threshold: 300,
            hover_lift_px: 5,
            currency_suffix: "so'm".to_string(),
        }
    }
}

impl PageConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_ADD_LABEL`: add-to-cart button text
    /// - `STOREFRONT_ADDED_TEMPLATE`: message template, must contain `{name}`
    /// - `STOREFRONT_TOAST_ENTER_MS` / `_DISPLAY_MS` / `_EXIT_MS`: toast timing
    /// - `STOREFRONT_SCROLL_TOP_THRESHOLD`: px offset for the scroll-to-top button
    /// - `STOREFRONT_HOVER_LIFT_PX`: card hover lift
    /// - `STOREFRONT_CURRENCY_SUFFIX`: e.g. "so'm"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PageConfig::default();

        if let Some(label) = lookup("STOREFRONT_ADD_LABEL") {
            // Card labels are compared trimmed, so the configured one is too.
            config.add_button_label = label.trim().to_string();
        }

        if let Some(template) = lookup("STOREFRONT_ADDED_TEMPLATE") {
            config.added_template = MessageTemplate::parse(template)
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_ADDED_TEMPLATE".to_string()))?;
        }

        config.toast_enter_ms =
            parse_or(&lookup, "STOREFRONT_TOAST_ENTER_MS", config.toast_enter_ms)?;
        config.toast_display_ms =
            parse_or(&lookup, "STOREFRONT_TOAST_DISPLAY_MS", config.toast_display_ms)?;
        config.toast_exit_ms =
            parse_or(&lookup, "STOREFRONT_TOAST_EXIT_MS", config.toast_exit_ms)?;
        config.scroll_top_threshold = parse_or(
            &lookup,
            "STOREFRONT_SCROLL_TOP_THRESHOLD",
            config.scroll_top_threshold,
        )?;
        config.hover_lift_px =
            parse_or(&lookup, "STOREFRONT_HOVER_LIFT_PX", config.hover_lift_px)?;

        if let Some(suffix) = lookup("STOREFRONT_CURRENCY_SUFFIX") {
            config.currency_suffix = suffix;
        }

        if config.add_button_label.is_empty() {
            return Err(ConfigError::MissingRequired("STOREFRONT_ADD_LABEL".to_string()));
        }

        Ok(config)
    }

    /// Toast timing derived from the millisecond settings.
    pub fn timing(&self) -> NotificationTiming {
        NotificationTiming {
            enter_delay: Duration::from_millis(self.toast_enter_ms),
            display: Duration::from_millis(self.toast_display_ms),
            exit: Duration::from_millis(self.toast_exit_ms),
        }
    }

    /// Formats an amount the way the page prints prices.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_page::PageConfig;
    ///
    /// let config = PageConfig::default();
    /// assert_eq!(config.format_price(150_000), "150 000 so'm");
    /// ```
    pub fn format_price(&self, units: i64) -> String {
        let amount = Money::from_units(units);
        if self.currency_suffix.is_empty() {
            amount.to_string()
        } else {
            format!("{} {}", amount, self.currency_suffix)
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProductCard};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_page() {
        let config = PageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.add_button_label, "Savatga");
        assert_eq!(config.scroll_top_threshold, 300);

        let timing = config.timing();
        assert_eq!(timing.enter_delay, Duration::from_millis(100));
        assert_eq!(timing.display, Duration::from_millis(3000));
        assert_eq!(timing.exit, Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let config = PageConfig::from_lookup(lookup(&[
            ("STOREFRONT_ADD_LABEL", "Add"),
            ("STOREFRONT_ADDED_TEMPLATE", "{name} added"),
            ("STOREFRONT_TOAST_DISPLAY_MS", " 1500 "),
            ("STOREFRONT_CURRENCY_SUFFIX", "UZS"),
        ]))
        .unwrap();

        assert_eq!(config.add_button_label, "Add");
        assert_eq!(config.added_template.render("Hat"), "Hat added");
        assert_eq!(config.toast_display_ms, 1500);
        assert_eq!(config.format_price(25_000), "25 000 UZS");
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = PageConfig::from_lookup(lookup(&[("STOREFRONT_TOAST_EXIT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "STOREFRONT_TOAST_EXIT_MS"));
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let err = PageConfig::from_lookup(lookup(&[("STOREFRONT_ADDED_TEMPLATE", "added")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_padded_label_still_finds_triggers() {
        let config = PageConfig::from_lookup(lookup(&[("STOREFRONT_ADD_LABEL", " Savatga ")]))
            .unwrap();
        assert_eq!(config.add_button_label, "Savatga");

        let cards = vec![ProductCard::new("Shirt", "50 000 so'm", "Savatga")];
        let catalog = Catalog::discover(cards, &config.add_button_label);
        assert_eq!(catalog.triggers(), &[0]);
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = PageConfig::from_lookup(lookup(&[("STOREFRONT_ADD_LABEL", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_format_price_without_suffix() {
        let config = PageConfig {
            currency_suffix: String::new(),
            ..PageConfig::default()
        };
        assert_eq!(config.format_price(1_000), "1 000");
    }
}
