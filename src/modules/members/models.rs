use std::collections::BTreeSet;

use crate::error::{LibraryError, Result};
use crate::modules::books::{Book, BookId};

/// Identifier of a member, unique among registered members.
pub type MemberId = i64;

/// A registered library member and the books they currently hold.
///
/// The member keeps book IDs only. Book status is updated by the library
/// once the member has accepted a borrow or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed: BTreeSet<BookId>,
}

impl Member {
    /// Validate and build a member with nothing borrowed. The name is stored trimmed.
    pub fn new(id: MemberId, name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::validation("name", "name cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            borrowed: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record `book` as held by this member. Fails if the book is not available.
    pub fn borrow(&mut self, book: &Book) -> Result<()> {
        if !book.is_available() {
            return Err(LibraryError::state(format!(
                "book '{}' is not available for borrowing",
                book.title()
            )));
        }
        self.borrowed.insert(book.id());
        Ok(())
    }

    /// Release `book`. Fails unless this member is the one holding it.
    pub fn return_book(&mut self, book: &Book) -> Result<()> {
        if !self.borrowed.remove(&book.id()) {
            return Err(LibraryError::state(format!(
                "book with ID {} was not borrowed by member {}",
                book.id(),
                self.id
            )));
        }
        Ok(())
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed.contains(&book_id)
    }

    /// IDs of the books currently held, ascending.
    pub fn list_borrowed(&self) -> Vec<BookId> {
        self.borrowed.iter().copied().collect()
    }
}
