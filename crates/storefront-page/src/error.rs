//! # Page Error Type
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Construction time                 Event time                           │
//! │  ─────────────────                 ──────────                           │
//! │  MissingCollaborator  (no sink)    Core(InvalidItem)  (bad card data)   │
//! │  NoRuntime            (no timers)  UnknownTrigger     (no such button)  │
//! │  Config               (bad env)    UnknownCard        (no such card)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Construction-time variants exist so a misconfigured page fails at startup
//! instead of silently dropping counts or notifications later.

use storefront_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PageError {
    /// A required sink was not supplied to the builder.
    #[error("Missing page collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The emitter was created outside a tokio runtime.
    #[error("No timer runtime available for notifications")]
    NoRuntime,

    /// An add-to-cart click referenced a card without an add button.
    #[error("No add-to-cart trigger on product card {0}")]
    UnknownTrigger(usize),

    /// A pointer event referenced a card index outside the catalog.
    #[error("No product card {0}")]
    UnknownCard(usize),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PageError {
    /// True when the visitor's action was rejected because of bad item data.
    pub fn is_invalid_item(&self) -> bool {
        matches!(self, PageError::Core(err) if err.is_invalid_item())
    }
}

/// Convenience type alias for Results with PageError.
pub type PageResult<T> = Result<T, PageError>;
