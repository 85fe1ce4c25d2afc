//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart and template failures                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-page errors (separate crate)                               │
//! │  └── PageError        - Wiring failures + wrapped CoreError            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → PageError → shell output          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line item was rejected by [`CartManager::add_item`](crate::CartManager::add_item).
    ///
    /// ## When This Occurs
    /// - Name is empty or whitespace
    /// - Price is negative
    /// - Price text on the page held no digits (nothing to parse)
    /// - Adding the price would overflow the cart total
    ///
    /// The cart is never mutated when this is returned.
    #[error("Invalid item: {0}")]
    InvalidItem(ValidationError),

    /// Validation error outside of the cart (templates, configuration).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for item rejections.
    pub fn is_invalid_item(&self) -> bool {
        matches!(self, CoreError::InvalidItem(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, template without placeholder).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_item_message() {
        let err = CoreError::InvalidItem(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid item: name is required");
        assert!(err.is_invalid_item());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("price must be between 0 and {}", i64::MAX)
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidFormat {
            field: "template".to_string(),
            reason: "missing {name}".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_invalid_item());
    }
}
