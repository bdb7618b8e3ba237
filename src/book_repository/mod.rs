//! Book storage and its search queries.

pub mod entity;
mod queries;

pub use queries::*;

use crate::error::Result;
use crate::framework::{InMemoryRepository, QueryHandler, Repository};
use crate::model::Book;

/// In-memory store of [`Book`]s keyed by id.
///
/// Construct one per owner (a [`CatalogSystem`](crate::lifecycle::CatalogSystem),
/// a test fixture, …); instances never share state.
#[derive(Debug, Clone, Default)]
pub struct BookRepository {
    books: InMemoryRepository<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches `field` (named as a string) for `value`.
    ///
    /// # Errors
    /// `InvalidArgument` if `field` is not title, author or genre.
    pub fn search_by(&self, field: &str, value: &str) -> Result<Vec<Book>> {
        let field = field.parse::<SearchField>()?;
        Ok(self.search(field, value))
    }

    /// Case-insensitive substring search, in stored order.
    pub fn search(&self, field: SearchField, value: &str) -> Vec<Book> {
        let needle = value.to_lowercase();
        self.books
            .filtered(|book| field.value_of(book).to_lowercase().contains(&needle))
    }

    /// Books currently available for borrowing, in stored order.
    pub fn find_available(&self) -> Vec<Book> {
        self.books.filtered(Book::is_available)
    }
}

impl Repository<Book> for BookRepository {
    fn save(&mut self, book: Book) -> Result<Book> {
        self.books.save(book)
    }

    fn find_by_id(&self, id: &u32) -> Option<Book> {
        self.books.find_by_id(id)
    }

    fn find_all(&self) -> Vec<Book> {
        self.books.find_all()
    }

    fn delete(&mut self, book: &Book) {
        self.books.delete(book)
    }

    fn update(&mut self, book: Book) -> Result<Book> {
        self.books.update(book)
    }

    fn count(&self) -> usize {
        self.books.count()
    }
}

impl QueryHandler<Book> for BookRepository {
    type Query = BookQuery;

    fn handle_query(&self, query: BookQuery) -> Result<Vec<Book>> {
        match query {
            BookQuery::SearchBy { field, value } => Ok(self.search(field, &value)),
            BookQuery::Available => Ok(self.find_available()),
        }
    }
}
