//! # Contact Form
//!
//! Client-side checks on the contact form, independent of the cart.
//!
//! ## Submit Flow
//! ```text
//! submit()
//!    │
//!    ├── validate_contact(values)
//!    │
//!    ├── issues? ──► highlight bad fields, un-highlight good ones
//!    │               banner = Errors([...messages in field order])
//!    │
//!    └── clean   ──► un-highlight all, banner = Success, clear fields
//! ```
//!
//! At most one banner is shown; each submit replaces the previous one.

use std::collections::HashSet;

use storefront_core::validation::{validate_contact, ContactField, ContactIssue, ContactSubmission};
use tracing::{debug, warn};

/// Confirmation shown after a clean submit.
pub const SUCCESS_MESSAGE: &str = "Xabaringiz muvaffaqiyatli yuborildi!";

/// The message block shown at the top of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// One line per rejected field.
    Errors(Vec<String>),
    Success(String),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The values that were accepted (the form itself is now cleared).
    Accepted(ContactSubmission),
    Rejected(Vec<ContactIssue>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Contact form state: field values, error highlights and the banner.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactSubmission,
    highlighted: HashSet<ContactField>,
    banner: Option<Banner>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's value as typed.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.values.name = value,
            ContactField::Email => self.values.email = value,
            ContactField::Message => self.values.message = value,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.value(field)
    }

    /// Whether the field currently carries the error border.
    pub fn is_highlighted(&self, field: ContactField) -> bool {
        self.highlighted.contains(&field)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Validates the form and updates highlights and banner.
    pub fn submit(&mut self) -> SubmitOutcome {
        let issues = validate_contact(&self.values);

        self.highlighted = issues.iter().map(|issue| issue.field).collect();

        if issues.is_empty() {
            let accepted = std::mem::take(&mut self.values);
            self.banner = Some(Banner::Success(SUCCESS_MESSAGE.to_string()));
            debug!("Contact form accepted");
            SubmitOutcome::Accepted(accepted)
        } else {
            let messages = issues.iter().map(|i| i.message().to_string()).collect();
            self.banner = Some(Banner::Errors(messages));
            warn!(
                fields = ?issues.iter().map(|i| i.field.id()).collect::<Vec<_>>(),
                "Contact form rejected"
            );
            SubmitOutcome::Rejected(issues)
        }
    }
}
