//! # Validation Module
//!
//! Input validation for line items and the contact form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Page parsing (storefront-page::catalog)                      │
//! │  └── Price text → digits → i64                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Line item: name present, price >= 0                               │
//! │  └── Contact form: name, email shape, message                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartManager                                                  │
//! │  └── Total must stay representable                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_item_name, validate_price};
//!
//! validate_item_name("Shirt").unwrap();
//! validate_price(0).unwrap();
//! assert!(validate_price(-1).is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a line item name.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(50_000).is_ok());
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a whole line item. Name is checked first.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price)
}

// =============================================================================
// Contact Form
// =============================================================================

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Form element id of the field.
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Message shown to the visitor when the field is rejected.
    pub fn error_message(&self) -> &'static str {
        match self {
            ContactField::Name => "Iltimos, ismingizni kiriting",
            ContactField::Email => "Iltimos, to'g'ri email manzilini kiriting",
            ContactField::Message => "Iltimos, xabarni kiriting",
        }
    }
}

/// Raw values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// A rejected contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactIssue {
    pub field: ContactField,
    pub error: ValidationError,
}

impl ContactIssue {
    /// Visitor-facing message for this issue.
    pub fn message(&self) -> &'static str {
        self.field.error_message()
    }
}

/// Validates an email address shape (`local@domain.tld`, no whitespace).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_email;
///
/// assert!(validate_email("ali@example.uz").is_ok());
/// assert!(validate_email("ali@example").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain.tld".to_string(),
        });
    }

    Ok(())
}

fn validate_required(field: ContactField, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.id().to_string(),
        });
    }

    Ok(())
}

/// Validates every contact field and returns the issues in field order.
///
/// An empty result means the submission is acceptable. All fields are
/// checked even after the first failure so the form can highlight each one.
pub fn validate_contact(submission: &ContactSubmission) -> Vec<ContactIssue> {
    ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = submission.value(field);
            let result = match field {
                ContactField::Email => validate_email(value),
                ContactField::Name | ContactField::Message => validate_required(field, value),
            };
            result.err().map(|error| ContactIssue { field, error })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Shirt").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_item_name_has_no_length_limit() {
        let long = "Klassik ko'ylak ".repeat(500);
        assert!(validate_item_name(&long).is_ok());
        assert!(validate_line_item(&LineItem::new(long, 1)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(i64::MAX).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_line_item_reports_name_first() {
        let err = validate_line_item(&LineItem::new("", -5)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ali@example.uz").is_ok());
        assert!(validate_email("  ali@mail.example.com  ").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("ali").is_err());
        assert!(validate_email("ali@example").is_err());
        assert!(validate_email("a li@example.uz").is_err());
        assert!(validate_email("ali@@example.uz").is_err());
    }

    #[test]
    fn test_validate_contact_accepts_complete_form() {
        let issues = validate_contact(&submission("Ali", "ali@example.uz", "Salom"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_validate_contact_reports_every_field_in_order() {
        let issues = validate_contact(&submission(" ", "nope", ""));
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(issues[1].message(), "Iltimos, to'g'ri email manzilini kiriting");
    }

    #[test]
    fn test_validate_contact_single_issue() {
        let issues = validate_contact(&submission("Ali", "ali@example.uz", "   "));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, ContactField::Message);
        assert_eq!(issues[0].message(), "Iltimos, xabarni kiriting");
    }
}
