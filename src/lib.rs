//! # Library Catalog
//!
//! > **Books, members, and the repositories that keep them.**
//!
//! This crate models a small library catalog: validated book and user entities,
//! and in-memory repositories that store, look up, search and update them.
//!
//! ## 🏗️ Design
//!
//! ### Entities
//! [`Book`](model::Book) and [`User`](model::User) carry their shared fields plus a
//! variant tag ([`BookFormat`](model::BookFormat), [`UserRole`](model::UserRole)).
//! Fields are private and every setter validates before it assigns, so an entity
//! is never left in an invalid state. Equality is id plus variant.
//!
//! ### Repositories
//! [`Repository`](framework::Repository) is the generic save / find / delete / update
//! contract, implemented once by [`InMemoryRepository`](framework::InMemoryRepository).
//! [`BookRepository`](book_repository::BookRepository) adds case-insensitive field
//! search and an availability filter; [`UserRepository`](user_repository::UserRepository)
//! mirrors it for members.
//!
//! Two behaviours worth knowing:
//! - Every read returns an owned snapshot; nothing handed out aliases the store.
//! - `update` removes the old entity and appends the new one, so an updated
//!   entity moves to the end of `find_all()`.
//!
//! ### Errors
//! Failures are values, never panics: [`CatalogError`](error::CatalogError) has
//! `InvalidArgument`, `DuplicateKey` and `NotFound`. Deleting something absent
//! is not an error.
//!
//! ### Sharing across tasks
//! The repositories are single-owner. When several async tasks need the same
//! catalog, [`CatalogSystem`](lifecycle::CatalogSystem) moves each repository into a
//! [`RepositoryActor`](framework::RepositoryActor) and hands out cloneable
//! clients ([`BookClient`](clients::BookClient), [`UserClient`](clients::UserClient)).
//! Requests are processed one at a time, so the store needs no lock.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - entities and their validation
//! - [`framework`] - the generic contract, the in-memory store, the actor plumbing
//! - [`book_repository`], [`user_repository`] - concrete stores and their queries
//! - [`clients`] - typed async handles to the actors
//! - [`lifecycle`] - system start-up / shutdown, configuration, tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use library_catalog::book_repository::BookRepository;
//! use library_catalog::framework::Repository;
//! use library_catalog::model::{Book, BookCreate};
//!
//! let mut books = BookRepository::new();
//! let quijote = Book::physical(
//!     BookCreate::new(1, "Don Quijote", "Cervantes", 1605, "Novela"),
//!     "A-12",
//!     863,
//! )?;
//! books.save(quijote)?;
//!
//! assert_eq!(books.search_by("titulo", "quijote")?.len(), 1);
//! assert!(books.search_by("autor", "garcía")?.is_empty());
//! # Ok::<(), library_catalog::error::CatalogError>(())
//! ```
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod book_repository;
pub mod clients;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod user_repository;
