use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use super::validation;
use crate::error::Result;

/// Represents a book held by the library.
///
/// # Repository Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored by a [`BookRepository`](crate::book_repository::BookRepository).
///
/// Fields are private: every change goes through a setter, and the setters for
/// `id`, `title`, `author` and `publication_year` validate before assigning.
/// Two books are equal when they share the same `id` *and* the same
/// [`BookFormat`] variant.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    id: u32,
    title: String,
    author: String,
    publication_year: u32,
    genre: String,
    available: bool,
    format: BookFormat,
}

/// Shared fields required to create a book of any format.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publication_year: u32,
    pub genre: String,
}

impl BookCreate {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: u32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
        }
    }
}

/// The concrete kind of a book, carrying the fields only that kind has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum BookFormat {
    Physical(PhysicalDetails),
    Digital(DigitalDetails),
}

impl BookFormat {
    /// Human-readable label of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            BookFormat::Physical(_) => "Physical",
            BookFormat::Digital(_) => "Digital",
        }
    }
}

/// Shelf placement of a printed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicalDetails {
    location: String,
    page_count: u32,
}

impl PhysicalDetails {
    /// # Arguments
    /// * `location` - Free-form shelf location (e.g. "A-12")
    /// * `page_count` - Number of pages, must be positive
    pub fn new(location: impl Into<String>, page_count: u32) -> Result<Self> {
        Ok(Self {
            location: location.into(),
            page_count: validation::positive("page count", page_count)?,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn set_page_count(&mut self, page_count: u32) -> Result<()> {
        self.page_count = validation::positive("page count", page_count)?;
        Ok(())
    }
}

/// Download metadata of an electronic copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalDetails {
    file_format: String,
    size_kb: u32,
}

impl DigitalDetails {
    pub fn new(file_format: impl Into<String>, size_kb: u32) -> Result<Self> {
        Ok(Self {
            file_format: file_format.into(),
            size_kb: validation::positive("file size", size_kb)?,
        })
    }

    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    pub fn set_file_format(&mut self, file_format: impl Into<String>) {
        self.file_format = file_format.into();
    }

    pub fn size_kb(&self) -> u32 {
        self.size_kb
    }

    pub fn set_size_kb(&mut self, size_kb: u32) -> Result<()> {
        self.size_kb = validation::positive("file size", size_kb)?;
        Ok(())
    }
}

impl Book {
    /// Creates a new, available Book after validating every shared field.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidArgument`](crate::error::CatalogError::InvalidArgument)
    /// for a zero id or year, or a blank title or author.
    pub fn new(params: BookCreate, format: BookFormat) -> Result<Self> {
        Ok(Self {
            id: validation::positive_id(params.id)?,
            title: validation::non_blank("title", params.title)?,
            author: validation::non_blank("author", params.author)?,
            publication_year: validation::positive("publication year", params.publication_year)?,
            genre: params.genre,
            available: true,
            format,
        })
    }

    /// Creates a printed book.
    pub fn physical(params: BookCreate, location: impl Into<String>, page_count: u32) -> Result<Self> {
        let details = PhysicalDetails::new(location, page_count)?;
        Self::new(params, BookFormat::Physical(details))
    }

    /// Creates an electronic book.
    pub fn digital(params: BookCreate, file_format: impl Into<String>, size_kb: u32) -> Result<Self> {
        let details = DigitalDetails::new(file_format, size_kb)?;
        Self::new(params, BookFormat::Digital(details))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) -> Result<()> {
        self.id = validation::positive_id(id)?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.title = validation::non_blank("title", title.into())?;
        Ok(())
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<()> {
        self.author = validation::non_blank("author", author.into())?;
        Ok(())
    }

    pub fn publication_year(&self) -> u32 {
        self.publication_year
    }

    pub fn set_publication_year(&mut self, year: u32) -> Result<()> {
        self.publication_year = validation::positive("publication year", year)?;
        Ok(())
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    /// Describes the concrete kind of this book.
    pub fn kind(&self) -> &'static str {
        self.format.label()
    }

    pub fn physical_details(&self) -> Option<&PhysicalDetails> {
        match &self.format {
            BookFormat::Physical(details) => Some(details),
            BookFormat::Digital(_) => None,
        }
    }

    pub fn physical_details_mut(&mut self) -> Option<&mut PhysicalDetails> {
        match &mut self.format {
            BookFormat::Physical(details) => Some(details),
            BookFormat::Digital(_) => None,
        }
    }

    pub fn digital_details(&self) -> Option<&DigitalDetails> {
        match &self.format {
            BookFormat::Digital(details) => Some(details),
            BookFormat::Physical(_) => None,
        }
    }

    pub fn digital_details_mut(&mut self) -> Option<&mut DigitalDetails> {
        match &mut self.format {
            BookFormat::Digital(details) => Some(details),
            BookFormat::Physical(_) => None,
        }
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && mem::discriminant(&self.format) == mem::discriminant(&other.format)
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Author: {} | Year: {} | Genre: {} | Kind: {} | Available: {}",
            self.id,
            self.title,
            self.author,
            self.publication_year,
            self.genre,
            self.kind(),
            if self.available { "Yes" } else { "No" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn quijote() -> Book {
        Book::physical(
            BookCreate::new(1, "Don Quijote", "Cervantes", 1605, "Novela"),
            "A-12",
            863,
        )
        .unwrap()
    }

    #[test]
    fn test_new_book_is_available() {
        let book = quijote();
        assert!(book.is_available());
        assert_eq!(book.kind(), "Physical");
        assert_eq!(book.physical_details().unwrap().page_count(), 863);
        assert!(book.digital_details().is_none());
    }

    #[test]
    fn test_constructor_rejects_invalid_fields() {
        let blank_title = BookCreate::new(1, "  ", "Cervantes", 1605, "Novela");
        assert!(matches!(
            Book::physical(blank_title, "A-1", 10),
            Err(CatalogError::InvalidArgument(_))
        ));

        let zero_id = BookCreate::new(0, "Title", "Author", 1605, "");
        assert!(Book::digital(zero_id, "epub", 300).is_err());

        let zero_pages = BookCreate::new(2, "Title", "Author", 1605, "");
        assert!(Book::physical(zero_pages, "A-1", 0).is_err());
    }

    #[test]
    fn test_failed_setters_keep_previous_value() {
        let mut book = quijote();

        assert!(book.set_id(0).is_err());
        assert!(book.set_title("").is_err());
        assert!(book.set_author(" ").is_err());
        assert!(book.set_publication_year(0).is_err());

        assert_eq!(book.id(), 1);
        assert_eq!(book.title(), "Don Quijote");
        assert_eq!(book.author(), "Cervantes");
        assert_eq!(book.publication_year(), 1605);
    }

    #[test]
    fn test_valid_setters_apply() {
        let mut book = quijote();
        book.set_id(9).unwrap();
        book.set_title("El Quijote").unwrap();
        book.set_genre("");
        book.set_available(false);

        let details = book.physical_details_mut().unwrap();
        details.set_location("B-3");
        assert!(details.set_page_count(0).is_err());
        assert_eq!(details.page_count(), 863);

        assert_eq!(book.id(), 9);
        assert_eq!(book.title(), "El Quijote");
        assert_eq!(book.genre(), "");
        assert!(!book.is_available());
        assert_eq!(book.physical_details().unwrap().location(), "B-3");
    }

    #[test]
    fn test_equality_is_id_and_variant() {
        let physical = quijote();
        let mut renamed = quijote();
        renamed.set_title("Another title").unwrap();
        let digital =
            Book::digital(BookCreate::new(1, "Don Quijote", "Cervantes", 1605, "Novela"), "epub", 2048)
                .unwrap();

        assert_eq!(physical, renamed);
        assert_ne!(physical, digital);
    }

    #[test]
    fn test_summary_line() {
        let mut book = quijote();
        book.set_available(false);
        assert_eq!(
            book.to_string(),
            "ID: 1 | Title: Don Quijote | Author: Cervantes | Year: 1605 | Genre: Novela | Kind: Physical | Available: No"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(quijote()).unwrap();
        assert_eq!(json["title"], "Don Quijote");
        assert_eq!(json["format"]["kind"], "Physical");
        assert_eq!(json["format"]["page_count"], 863);
    }
}
