use crate::book_repository::BookRepository;
use crate::clients::{BookClient, UserClient};
use crate::framework::RepositoryActor;
use crate::lifecycle::CatalogConfig;
use crate::model::{Book, User};
use crate::user_repository::UserRepository;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator that owns the catalog's repository actors.
///
/// There is no process-wide repository: each `CatalogSystem` builds its own
/// stores, so tests and embedders can run isolated instances side by side.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// system.book_client.save(book).await?;
/// let hits = system.book_client.search_by("titulo", "quijote").await?;
///
/// // Gracefully shut down when done
/// let (books, users) = system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Book actor
    pub book_client: BookClient,

    /// Client for interacting with the User actor
    pub user_client: UserClient,

    book_handle: JoinHandle<BookRepository>,
    user_handle: JoinHandle<UserRepository>,
}

impl CatalogSystem {
    /// Starts a system with empty repositories and the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&CatalogConfig::default())
    }

    pub fn with_config(config: &CatalogConfig) -> Self {
        Self::with_repositories(BookRepository::new(), UserRepository::new(), config)
    }

    /// Starts a system around pre-populated repositories.
    pub fn with_repositories(
        books: BookRepository,
        users: UserRepository,
        config: &CatalogConfig,
    ) -> Self {
        let (book_actor, book_resource_client) =
            RepositoryActor::<Book, _>::new(books, config.channel_capacity);
        let book_handle = tokio::spawn(book_actor.run());

        let (user_actor, user_resource_client) =
            RepositoryActor::<User, _>::new(users, config.channel_capacity);
        let user_handle = tokio::spawn(user_actor.run());

        info!(channel_capacity = config.channel_capacity, "Catalog system started");

        Self {
            book_client: BookClient::new(book_resource_client),
            user_client: UserClient::new(user_resource_client),
            book_handle,
            user_handle,
        }
    }

    /// Gracefully shuts down both actors and returns their final repositories.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue and
    /// exits. Clones of the clients held elsewhere keep their actor alive, so
    /// drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok((books, users))` if both actors shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(BookRepository, UserRepository), String> {
        info!("Shutting down catalog...");
        drop(self.book_client);
        drop(self.user_client);

        let books = self.book_handle.await.map_err(|e| {
            error!("Book actor task failed: {:?}", e);
            format!("Book actor task failed: {:?}", e)
        })?;
        let users = self.user_handle.await.map_err(|e| {
            error!("User actor task failed: {:?}", e);
            format!("User actor task failed: {:?}", e)
        })?;

        info!("Catalog shutdown complete.");
        Ok((books, users))
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
