//! Generic repository framework.
//!
//! This module provides the building blocks shared by every store in the crate:
//!
//! - [`Entity`] - Trait that stored types implement
//! - [`Repository`] - The save / find / delete / update contract
//! - [`QueryHandler`] - Repository-specific queries on top of the contract
//! - [`InMemoryRepository`] - Vec-backed, insertion-ordered implementation
//! - [`RepositoryActor`] / [`RepositoryClient`] - Serialised access from many tasks
//! - [`FrameworkError`] - Transport errors plus pass-through catalog errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning real actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;

pub use actor::RepositoryActor;
pub use client::RepositoryClient;
pub use entity::Entity;
pub use error::FrameworkError;
pub use message::{RepositoryRequest, Response};
pub use repository::{InMemoryRepository, QueryHandler, Repository};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Result};

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: String,
        label: String,
    }

    impl Entity for Tag {
        type Id = String;
        const ENTITY_TYPE: &'static str = "Tag";

        fn id(&self) -> String {
            self.id.clone()
        }
    }

    #[derive(Debug)]
    enum TagQuery {
        LabelStartsWith(String),
        Fail,
    }

    #[derive(Default)]
    struct TagRepository {
        inner: InMemoryRepository<Tag>,
    }

    impl Repository<Tag> for TagRepository {
        fn save(&mut self, entity: Tag) -> Result<Tag> {
            self.inner.save(entity)
        }
        fn find_by_id(&self, id: &String) -> Option<Tag> {
            self.inner.find_by_id(id)
        }
        fn find_all(&self) -> Vec<Tag> {
            self.inner.find_all()
        }
        fn delete(&mut self, entity: &Tag) {
            self.inner.delete(entity)
        }
        fn update(&mut self, entity: Tag) -> Result<Tag> {
            self.inner.update(entity)
        }
    }

    impl QueryHandler<Tag> for TagRepository {
        type Query = TagQuery;

        fn handle_query(&self, query: TagQuery) -> Result<Vec<Tag>> {
            match query {
                TagQuery::LabelStartsWith(prefix) => {
                    Ok(self.inner.filtered(|t| t.label.starts_with(&prefix)))
                }
                TagQuery::Fail => Err(CatalogError::InvalidArgument("fail".into())),
            }
        }
    }

    fn tag(id: &str, label: &str) -> Tag {
        Tag { id: id.into(), label: label.into() }
    }

    #[tokio::test]
    async fn test_repository_actor_round_trip() {
        let (actor, client) = RepositoryActor::<Tag, _>::new(TagRepository::default(), 10);
        let handle = tokio::spawn(actor.run());

        client.save(tag("a", "rust")).await.unwrap();
        client.save(tag("b", "ruby")).await.unwrap();
        client.save(tag("c", "go")).await.unwrap();

        let err = client.save(tag("a", "dup")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Catalog(CatalogError::DuplicateKey { .. })));

        let found = client.query(TagQuery::LabelStartsWith("ru".into())).await.unwrap();
        assert_eq!(found.len(), 2);

        let err = client.query(TagQuery::Fail).await.unwrap_err();
        assert_eq!(err, FrameworkError::Catalog(CatalogError::InvalidArgument("fail".into())));

        client.update(tag("a", "rustacean")).await.unwrap();
        client.delete(tag("b", "ruby")).await.unwrap();

        let labels: Vec<_> = client
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["go", "rustacean"]);
        assert!(client.find_by_id("b".into()).await.unwrap().is_none());

        // Dropping the last client ends the loop and hands the store back.
        drop(client);
        let repository = handle.await.unwrap();
        assert_eq!(repository.count(), 2);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = RepositoryActor::<Tag, _>::new(TagRepository::default(), 1);
        drop(actor);

        let err = client.find_all().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
