//! Type-safe wrappers around [`RepositoryClient`](crate::framework::RepositoryClient).

pub mod actor_client;
pub mod book_client;
pub mod user_client;

pub use actor_client::*;
pub use book_client::*;
pub use user_client::*;
