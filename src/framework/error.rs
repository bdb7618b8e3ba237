//! # Framework Errors
//!
//! Errors surfaced by [`RepositoryClient`](super::RepositoryClient): transport failures
//! of the actor channel, plus core [`CatalogError`]s passed through unmodified.

use crate::error::CatalogError;

/// Errors that can occur when talking to a repository actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
