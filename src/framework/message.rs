//! # Generic Messages
//!
//! The message types exchanged between [`RepositoryClient`](super::RepositoryClient)
//! and [`RepositoryActor`](super::RepositoryActor).

use super::entity::Entity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a repository actor.
///
/// The first five variants map one-to-one onto the
/// [`Repository`](super::Repository) contract. `Query` carries the
/// repository-specific query enum (e.g. a field search), in the same way a
/// custom action extends plain CRUD.
#[derive(Debug)]
pub enum RepositoryRequest<T: Entity, Q> {
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        entity: T,
        respond_to: Response<()>,
    },
    Update {
        entity: T,
        respond_to: Response<T>,
    },
    Query {
        query: Q,
        respond_to: Response<Vec<T>>,
    },
}
