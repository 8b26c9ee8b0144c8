//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Only deterministic input failures live here; nothing in the storefront
/// domain performs IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A numeric value was malformed (e.g. a negative price).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value failed validation (e.g. blank identifier, bad config value).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
