//! The lending service: owns every book and member and coordinates borrow/return.

use std::collections::BTreeMap;

use crate::error::{LibraryError, Result};
use crate::modules::books::{Book, BookId, BookStatus};
use crate::modules::members::{Member, MemberId};

/// Operations the console (or any other front end) drives the library through.
pub trait LibraryManager {
    /// Shelve a new book. Fails with a conflict if the ID is already catalogued.
    fn add_book(&mut self, book: Book) -> Result<()>;

    /// Remove a book from the shelf. Borrowed books must be returned first.
    fn remove_book(&mut self, book_id: BookId) -> Result<()>;

    /// Lend an available book to a registered member.
    fn borrow_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<()>;

    /// Take a book back from the member holding it.
    fn return_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<()>;

    /// Books on the shelf, ordered by ID.
    fn list_available_books(&self) -> Vec<&Book>;

    /// Books held by `member_id`, ordered by ID. Unknown members hold nothing.
    fn list_borrowed_books(&self, member_id: MemberId) -> Vec<&Book>;

    /// Register a member so they can borrow. Fails with a conflict on a duplicate ID.
    fn register_member(&mut self, member: Member) -> Result<()>;
}

/// In-memory library.
///
/// A book ID lives in exactly one of `available_books` / `borrowed_books`.
/// A rejected operation leaves every map as it found it.
#[derive(Debug, Default)]
pub struct Library {
    available_books: BTreeMap<BookId, Book>,
    borrowed_books: BTreeMap<BookId, Book>,
    members: BTreeMap<MemberId, Member>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a book up wherever it currently is.
    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.available_books
            .get(&book_id)
            .or_else(|| self.borrowed_books.get(&book_id))
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.get(&member_id)
    }

    /// Total catalogued books, on the shelf or out.
    pub fn book_count(&self) -> usize {
        self.available_books.len() + self.borrowed_books.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl LibraryManager for Library {
    fn add_book(&mut self, book: Book) -> Result<()> {
        let book_id = book.id();
        // Borrowed IDs are checked too, so one ID never maps to two books.
        if self.available_books.contains_key(&book_id) || self.borrowed_books.contains_key(&book_id)
        {
            return Err(LibraryError::conflict(format!(
                "a book with id {} already exists",
                book_id
            )));
        }

        tracing::info!(book_id, title = %book.title(), status = %book.status(), "book added");
        self.available_books.insert(book_id, book);
        Ok(())
    }

    fn remove_book(&mut self, book_id: BookId) -> Result<()> {
        if self.available_books.remove(&book_id).is_none() {
            return Err(LibraryError::not_found(format!(
                "book with ID {} is not on the shelf; it must exist and be returned before it can be removed",
                book_id
            )));
        }

        tracing::info!(book_id, "book removed");
        Ok(())
    }

    fn borrow_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<()> {
        // Only shelved books can be lent; a book that is out is not found here.
        let mut book = self.available_books.remove(&book_id).ok_or_else(|| {
            LibraryError::not_found(format!("book with ID {} does not exist", book_id))
        })?;

        let accepted = if !book.is_available() {
            // A book can be shelved with a borrowed status; it stays unlendable.
            Err(LibraryError::state(format!(
                "book with ID {} is not available",
                book_id
            )))
        } else {
            match self.members.get_mut(&member_id) {
                Some(member) => member.borrow(&book),
                None => Err(LibraryError::not_found(format!(
                    "member with ID {} does not exist",
                    member_id
                ))),
            }
        };

        if let Err(err) = accepted {
            self.available_books.insert(book_id, book);
            return Err(err);
        }

        book.set_status(BookStatus::Borrowed);
        self.borrowed_books.insert(book_id, book);

        tracing::info!(book_id, member_id, "book borrowed");
        Ok(())
    }

    fn return_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<()> {
        let member = self.members.get_mut(&member_id).ok_or_else(|| {
            LibraryError::not_found(format!("member with ID {} does not exist", member_id))
        })?;

        let mut book = self.borrowed_books.remove(&book_id).ok_or_else(|| {
            LibraryError::not_found(format!("book with ID {} was not borrowed", book_id))
        })?;

        if let Err(err) = member.return_book(&book) {
            self.borrowed_books.insert(book_id, book);
            return Err(err);
        }

        book.set_status(BookStatus::Available);
        self.available_books.insert(book_id, book);

        tracing::info!(book_id, member_id, "book returned");
        Ok(())
    }

    fn list_available_books(&self) -> Vec<&Book> {
        self.available_books.values().collect()
    }

    fn list_borrowed_books(&self, member_id: MemberId) -> Vec<&Book> {
        let Some(member) = self.members.get(&member_id) else {
            return Vec::new();
        };

        member
            .list_borrowed()
            .into_iter()
            .filter_map(|book_id| self.borrowed_books.get(&book_id))
            .collect()
    }

    fn register_member(&mut self, member: Member) -> Result<()> {
        let member_id = member.id();
        if self.members.contains_key(&member_id) {
            return Err(LibraryError::conflict(format!(
                "a member with id {} already exists",
                member_id
            )));
        }

        tracing::info!(member_id, name = %member.name(), "member registered");
        self.members.insert(member_id, member);
        Ok(())
    }
}
