//! Error types for the catalog core.

use thiserror::Error;

/// Errors raised synchronously by entities and repositories.
///
/// None of these are recovered internally; they reach the immediate caller unmodified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A field value violates an entity invariant, or a search field is unknown.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `save` was called with an id that is already stored.
    #[error("{entity} already exists: {id}")]
    DuplicateKey { entity: &'static str, id: String },

    /// `update` was called with an id that is not stored.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl CatalogError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CatalogError::InvalidArgument(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
