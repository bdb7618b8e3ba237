//! Queries the Book repository answers beyond plain CRUD.
//!
//! These are handled by [`QueryHandler::handle_query`](crate::framework::QueryHandler::handle_query)
//! on [`BookRepository`](super::BookRepository).

use crate::error::CatalogError;
use crate::model::Book;
use std::str::FromStr;

/// Book fields that support text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// The value of this field on `book`.
    pub fn value_of(self, book: &Book) -> &str {
        match self {
            SearchField::Title => book.title(),
            SearchField::Author => book.author(),
            SearchField::Genre => book.genre(),
        }
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    /// Parses `titulo`, `autor` or `genero`, ignoring case. Nothing else.
    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field.to_lowercase().as_str() {
            "titulo" => Ok(SearchField::Title),
            "autor" => Ok(SearchField::Author),
            "genero" => Ok(SearchField::Genre),
            _ => Err(CatalogError::InvalidArgument(format!(
                "unknown search field: {field}"
            ))),
        }
    }
}

/// Custom queries for Book repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    /// Case-insensitive substring search over one field.
    SearchBy { field: SearchField, value: String },
    /// Books whose `available` flag is set.
    Available,
}
