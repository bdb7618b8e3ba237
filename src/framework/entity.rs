//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored type (Book, User, …) satisfies so the
//! generic [`InMemoryRepository`](super::InMemoryRepository) and
//! [`RepositoryActor`](super::RepositoryActor) can be written once and reused.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored entity must implement.
///
/// # Architecture Note
/// The associated `Id` type keeps lookups type-safe: a `Book` repository is
/// queried with a book id, never with something else. Equality (`PartialEq`)
/// is left to the entity; repositories use it for `delete` and `Id` for
/// every other lookup.
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Short type name used in errors and log fields (e.g. `"Book"`).
    const ENTITY_TYPE: &'static str;

    /// The entity's current identifier.
    fn id(&self) -> Self::Id;
}
