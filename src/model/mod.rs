//! Domain entities implementing the [`Entity`](crate::framework::Entity) trait.

pub mod book;
pub mod user;
mod validation;

pub use book::*;
pub use user::*;
