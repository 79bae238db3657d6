use std::fmt;
use std::str::FromStr;

use crate::error::{LibraryError, Result};

/// Identifier of a book, unique across the library.
pub type BookId = i64;

/// Lending status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookStatus {
    /// On the shelf and free to borrow
    #[default]
    Available,
    /// Held by exactly one member
    Borrowed,
}

impl BookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Borrowed => "borrowed",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "available" => Ok(Self::Available),
            "borrowed" => Ok(Self::Borrowed),
            _ => Err(LibraryError::validation(
                "status",
                "status must be either 'available' or 'borrowed'",
            )),
        }
    }
}

/// A catalogued book.
///
/// Identity, title and author are fixed at construction. The status only
/// changes through [`crate::service::Library::borrow_book`] and
/// [`crate::service::Library::return_book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    status: BookStatus,
}

impl Book {
    /// Validate and build a book. Title and author are stored trimmed.
    pub fn new(id: BookId, title: &str, author: &str, status: BookStatus) -> Result<Self> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() {
            return Err(LibraryError::validation("title", "title cannot be empty"));
        }
        if author.is_empty() {
            return Err(LibraryError::validation("author", "author cannot be empty"));
        }

        Ok(Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            status,
        })
    }

    /// Build a book from raw text input, parsing the status as well.
    pub fn from_input(id: BookId, title: &str, author: &str, status: &str) -> Result<Self> {
        let status = status.parse::<BookStatus>();
        // Title and author are reported before the status, matching prompt order.
        let book = Self::new(id, title, author, BookStatus::Available)?;
        Ok(Self {
            status: status?,
            ..book
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    pub(crate) fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Status: {}",
            self.id, self.title, self.author, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_echoes_values() {
        let book = Book::new(1, "  Dune ", "\tHerbert\n", BookStatus::Available).unwrap();
        assert_eq!(book.id(), 1);
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Herbert");
        assert_eq!(book.status(), BookStatus::Available);
    }

    #[test]
    fn blank_title_or_author_is_rejected() {
        let err = Book::new(1, "   ", "Herbert", BookStatus::Available).unwrap_err();
        assert_eq!(err, LibraryError::validation("title", "title cannot be empty"));

        let err = Book::new(1, "Dune", "", BookStatus::Borrowed).unwrap_err();
        assert_eq!(err, LibraryError::validation("author", "author cannot be empty"));
    }

    #[test]
    fn status_parses_known_words_only() {
        assert_eq!(" available ".parse::<BookStatus>(), Ok(BookStatus::Available));
        assert_eq!("borrowed\n".parse::<BookStatus>(), Ok(BookStatus::Borrowed));

        for bad in ["", "lost", "availablee", "borrow", "Borrowed", "AVAILABLE"] {
            let err = bad.parse::<BookStatus>().unwrap_err();
            assert_eq!(err.code(), "validation_error", "input {bad:?}");
        }
    }

    #[test]
    fn from_input_checks_title_before_status() {
        let err = Book::from_input(3, "", "Austen", "lost").unwrap_err();
        assert!(matches!(err, LibraryError::Validation { field: "title", .. }));

        let err = Book::from_input(3, "Emma", "Austen", "lost").unwrap_err();
        assert!(matches!(err, LibraryError::Validation { field: "status", .. }));

        let book = Book::from_input(3, "Emma", "Austen", "borrowed").unwrap();
        assert_eq!(book.status(), BookStatus::Borrowed);
        assert!(!book.is_available());
    }

    #[test]
    fn display_matches_listing_format() {
        let book = Book::new(1, "Dune", "Herbert", BookStatus::Available).unwrap();
        assert_eq!(
            book.to_string(),
            "ID: 1, Title: Dune, Author: Herbert, Status: available"
        );
    }
}
