//! Runtime orchestration and lifecycle management.
//!
//! - [`CatalogSystem`] - Starts the repository actors, hands out clients, shuts them down
//! - [`CatalogConfig`] - Channel sizing, overridable from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::config::*;
pub use self::tracing::*;
