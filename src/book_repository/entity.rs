//! Entity trait implementation for the Book domain type.

use crate::framework::Entity;
use crate::model::Book;

impl Entity for Book {
    type Id = u32;
    const ENTITY_TYPE: &'static str = "Book";

    fn id(&self) -> u32 {
        Book::id(self)
    }
}
