//! # Generic Repository Actor
//!
//! The repositories themselves are single-owner and synchronous. When several
//! tasks need the same catalog, [`RepositoryActor`] provides the external
//! synchronisation: it owns one repository inside its own Tokio task and
//! processes requests sequentially, so the store is never touched concurrently
//! and needs no lock.

use super::client::RepositoryClient;
use super::entity::Entity;
use super::error::FrameworkError;
use super::message::RepositoryRequest;
use super::repository::QueryHandler;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that serves one repository.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RepositoryActor::new(repository, buffer)` returns the actor (server)
///     and a [`RepositoryClient`] (interface).
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client freely; dropping every clone stops the actor.
///
/// ```rust,ignore
/// let (actor, client) = RepositoryActor::new(BookRepository::new(), 32);
/// tokio::spawn(actor.run());
/// let saved = client.save(book).await?;
/// ```
pub struct RepositoryActor<T: Entity, R: QueryHandler<T>> {
    receiver: mpsc::Receiver<RepositoryRequest<T, R::Query>>,
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, R: QueryHandler<T>> RepositoryActor<T, R> {
    /// Creates a new actor around `repository` and its associated client.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store this actor will own exclusively.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(repository: R, buffer_size: usize) -> (Self, RepositoryClient<T, R::Query>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            repository,
            _entity: PhantomData,
        };
        (actor, RepositoryClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the repository so its final state can be inspected after shutdown.
    pub async fn run(mut self) -> R {
        let entity_type = T::ENTITY_TYPE;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RepositoryRequest::Save { entity, respond_to } => {
                    let id = entity.id();
                    debug!(entity_type, %id, "Save");
                    let result = self.repository.save(entity).map_err(FrameworkError::from);
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.repository.count(), "Saved"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::FindById { id, respond_to } => {
                    let item = self.repository.find_by_id(&id);
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                RepositoryRequest::FindAll { respond_to } => {
                    let items = self.repository.find_all();
                    debug!(entity_type, count = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
                RepositoryRequest::Delete { entity, respond_to } => {
                    let id = entity.id();
                    let before = self.repository.count();
                    self.repository.delete(&entity);
                    let removed = self.repository.count() < before;
                    info!(entity_type, %id, removed, size = self.repository.count(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                RepositoryRequest::Update { entity, respond_to } => {
                    let id = entity.id();
                    debug!(entity_type, %id, "Update");
                    let result = self.repository.update(entity).map_err(FrameworkError::from);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let result = self.repository.handle_query(query).map_err(FrameworkError::from);
                    match &result {
                        Ok(items) => debug!(entity_type, matches = items.len(), "Query ok"),
                        Err(e) => warn!(entity_type, error = %e, "Query failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.repository.count(), "Shutdown");
        self.repository
    }
}
