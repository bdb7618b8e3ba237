use crate::framework::{Entity, FrameworkError, RepositoryClient};
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for entity-specific clients to inherit the standard repository operations.
///
/// Implementors only supply [`inner`](ActorClient::inner); `save`, `find_by_id`,
/// `find_all`, `update` and `delete` come for free, each wrapped in a tracing span.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    /// The repository-specific query type carried by the inner client.
    type Query: Send + Debug + 'static;

    /// Access the inner generic RepositoryClient.
    fn inner(&self) -> &RepositoryClient<T, Self::Query>;

    /// Store a new entity.
    #[tracing::instrument(skip(self, entity), fields(id = %entity.id()))]
    async fn save(&self, entity: T) -> Result<T, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().save(entity).await
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await
    }

    /// Fetch a snapshot of every stored entity.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().find_all().await
    }

    /// Replace the stored entity with the same ID.
    #[tracing::instrument(skip(self, entity), fields(id = %entity.id()))]
    async fn update(&self, entity: T) -> Result<T, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().update(entity).await
    }

    /// Remove an entity. Succeeds even if it was not stored.
    #[tracing::instrument(skip(self, entity), fields(id = %entity.id()))]
    async fn delete(&self, entity: T) -> Result<(), FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().delete(entity).await
    }
}
