//! # Repository Contract
//!
//! [`Repository`] is the generic capability interface over an entity type; the
//! [`InMemoryRepository`] implements it once for every [`Entity`].
//!
//! ## Semantics
//!
//! * **save** rejects an id that is already stored (`DuplicateKey`).
//! * **find_by_id** returns the single entity with that id, if any.
//! * **find_all** returns an owned snapshot in insertion order.
//! * **delete** removes the entity *equal* to the argument; absence is not an error.
//! * **update** requires the id to exist (`NotFound`), then removes the stored
//!   entity and appends the new one. The updated entity therefore moves to the
//!   end of the iteration order.
//!
//! Lookups are linear scans; no index is maintained.

use super::entity::Entity;
use crate::error::{CatalogError, Result};
use std::fmt::Debug;

/// Storage operations shared by every repository.
pub trait Repository<T: Entity> {
    /// Inserts `entity` and returns it.
    ///
    /// # Errors
    /// [`CatalogError::DuplicateKey`] if an entity with the same id is stored.
    fn save(&mut self, entity: T) -> Result<T>;

    /// Returns the entity with the given id, if any.
    fn find_by_id(&self, id: &T::Id) -> Option<T>;

    /// Returns a copy of every stored entity, in stored order.
    fn find_all(&self) -> Vec<T>;

    /// Removes the stored entity equal to `entity`. No-op when absent.
    fn delete(&mut self, entity: &T);

    /// Replaces the stored entity that has `entity`'s id.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if no entity with that id is stored.
    fn update(&mut self, entity: T) -> Result<T>;

    /// Number of stored entities.
    fn count(&self) -> usize {
        self.find_all().len()
    }
}

/// Repository-specific queries beyond the CRUD contract.
///
/// The `Query` enum plays the part of a custom action: each repository
/// defines its own, and the [`RepositoryActor`](super::RepositoryActor)
/// forwards it here without knowing its shape.
pub trait QueryHandler<T: Entity>: Repository<T> + Send + 'static {
    type Query: Send + Debug + 'static;

    /// Runs `query`, returning matches in stored order.
    fn handle_query(&self, query: Self::Query) -> Result<Vec<T>>;
}

/// Insertion-ordered, Vec-backed store for any [`Entity`].
///
/// Every read hands out clones, so callers never observe later mutations of
/// the store through a result they already hold.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the entities matching `predicate`, in stored order.
    pub fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|&item| predicate(item)).cloned().collect()
    }

    fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id() == id)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn save(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        if self.position_of(&id).is_some() {
            return Err(CatalogError::DuplicateKey {
                entity: T::ENTITY_TYPE,
                id: id.to_string(),
            });
        }
        self.items.push(entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: &T::Id) -> Option<T> {
        self.items.iter().find(|item| &item.id() == id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn delete(&mut self, entity: &T) {
        if let Some(index) = self.items.iter().position(|item| item == entity) {
            self.items.remove(index);
        }
    }

    fn update(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        let Some(index) = self.position_of(&id) else {
            return Err(CatalogError::NotFound {
                entity: T::ENTITY_TYPE,
                id: id.to_string(),
            });
        };
        self.items.remove(index);
        self.items.push(entity.clone());
        Ok(entity)
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug)]
    struct Note {
        id: u64,
        text: String,
        pinned: bool,
    }

    impl PartialEq for Note {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id && self.pinned == other.pinned
        }
    }

    impl Entity for Note {
        type Id = u64;
        const ENTITY_TYPE: &'static str = "Note";

        fn id(&self) -> u64 {
            self.id
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note { id, text: text.into(), pinned: false }
    }

    fn ids(notes: &[Note]) -> Vec<u64> {
        notes.iter().map(|n| n.id).collect()
    }

    // --- Tests ---

    #[test]
    fn test_save_then_find() {
        let mut repo = InMemoryRepository::new();
        let saved = repo.save(note(1, "first")).unwrap();
        assert_eq!(saved.text, "first");

        let found = repo.find_by_id(&1).unwrap();
        assert_eq!(found.text, "first");
        assert!(repo.find_by_id(&2).is_none());
    }

    #[test]
    fn test_duplicate_save_leaves_store_unchanged() {
        let mut repo = InMemoryRepository::new();
        repo.save(note(1, "first")).unwrap();

        let err = repo.save(note(1, "again")).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey { entity: "Note", id: "1".into() });
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.find_by_id(&1).unwrap().text, "first");
    }

    #[test]
    fn test_find_all_is_a_snapshot() {
        let mut repo = InMemoryRepository::new();
        repo.save(note(1, "a")).unwrap();
        repo.save(note(2, "b")).unwrap();

        let mut snapshot = repo.find_all();
        snapshot.clear();
        assert_eq!(ids(&repo.find_all()), vec![1, 2]);
    }

    #[test]
    fn test_update_moves_entity_to_the_end() {
        let mut repo = InMemoryRepository::new();
        for id in 1..=3 {
            repo.save(note(id, "x")).unwrap();
        }

        repo.update(note(1, "edited")).unwrap();
        assert_eq!(ids(&repo.find_all()), vec![2, 3, 1]);
        assert_eq!(repo.find_by_id(&1).unwrap().text, "edited");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut repo = InMemoryRepository::new();
        repo.save(note(1, "x")).unwrap();

        let err = repo.update(note(5, "y")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { entity: "Note", .. }));
        assert_eq!(ids(&repo.find_all()), vec![1]);
    }

    #[test]
    fn test_delete_uses_entity_equality() {
        let mut repo = InMemoryRepository::new();
        repo.save(note(1, "x")).unwrap();
        repo.save(note(2, "y")).unwrap();

        // Same id, but unequal by the entity's own equality.
        let mut pinned = note(1, "x");
        pinned.pinned = true;
        repo.delete(&pinned);
        assert_eq!(repo.count(), 2);

        repo.delete(&note(9, "absent"));
        assert_eq!(repo.count(), 2);

        repo.delete(&note(1, "text is ignored"));
        assert_eq!(ids(&repo.find_all()), vec![2]);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let mut repo = InMemoryRepository::new();
        for id in 1..=5 {
            repo.save(note(id, if id % 2 == 0 { "even" } else { "odd" })).unwrap();
        }
        assert_eq!(ids(&repo.filtered(|n| n.text == "odd")), vec![1, 3, 5]);
        assert!(!repo.is_empty());
    }
}
