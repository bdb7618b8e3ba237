//! Demo: a catalog session through the async clients.

use library_catalog::clients::ActorClient;
use library_catalog::framework::Repository;
use library_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use library_catalog::model::{Book, BookCreate, User, UserCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    let system = CatalogSystem::with_config(&config);

    let span = tracing::info_span!("seeding");
    async {
        let books = [
            Book::physical(BookCreate::new(1, "Don Quijote", "Cervantes", 1605, "Novela"), "A-12", 863)?,
            Book::physical(
                BookCreate::new(2, "Cien años de soledad", "Gabriel García Márquez", 1967, "Novela"),
                "B-03",
                471,
            )?,
            Book::digital(BookCreate::new(3, "Rimas", "Gustavo Adolfo Bécquer", 1871, "Poesía"), "epub", 512)?,
        ];
        for book in books {
            system.book_client.save(book).await?;
        }
        system
            .user_client
            .save(User::student(UserCreate::new(1, "Ana Pérez", "ana@uni.edu", "555-0101"))?)
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    for book in system.book_client.search_by("titulo", "quijote").await? {
        info!(%book, "Search hit");
    }

    // Lend the Quijote out: flip availability and write it back.
    if let Some(mut book) = system.book_client.find_by_id(1).await? {
        book.set_available(false);
        system.book_client.update(book).await?;
    }
    for book in system.book_client.find_available().await? {
        info!(%book, "Available");
    }

    if let Err(e) = system.book_client.search_by("isbn", "978").await {
        warn!(error = %e, "Rejected search");
    }

    for user in system.user_client.find_all().await? {
        info!(%user, "Member");
    }

    let (books, users) = system.shutdown().await?;
    info!(books = books.count(), users = users.count(), "Done");
    Ok(())
}
