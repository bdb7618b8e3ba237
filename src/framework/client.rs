//! # Generic Client
//!
//! `RepositoryClient` is the *client* half of the actor pattern. It holds the
//! sending end of the actor's channel and turns each call into a
//! [`RepositoryRequest`] plus a one-shot reply.

use super::entity::Entity;
use super::error::FrameworkError;
use super::message::{RepositoryRequest, Response};
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable handle to a [`RepositoryActor`](super::RepositoryActor).
pub struct RepositoryClient<T: Entity, Q> {
    sender: mpsc::Sender<RepositoryRequest<T, Q>>,
}

impl<T: Entity, Q> Clone for RepositoryClient<T, Q> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity, Q: Send + Debug + 'static> RepositoryClient<T, Q> {
    pub fn new(sender: mpsc::Sender<RepositoryRequest<T, Q>>) -> Self {
        Self { sender }
    }

    pub async fn save(&self, entity: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| RepositoryRequest::Save { entity, respond_to }).await
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| RepositoryRequest::FindById { id, respond_to }).await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| RepositoryRequest::FindAll { respond_to }).await
    }

    pub async fn delete(&self, entity: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| RepositoryRequest::Delete { entity, respond_to }).await
    }

    pub async fn update(&self, entity: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| RepositoryRequest::Update { entity, respond_to }).await
    }

    pub async fn query(&self, query: Q) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| RepositoryRequest::Query { query, respond_to }).await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> RepositoryRequest<T, Q>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
