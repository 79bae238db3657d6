//! Interactive numbered-menu front end for a [`LibraryManager`].

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use uuid::Uuid;

use crate::error::LibraryError;
use crate::modules::books::{Book, BookId};
use crate::modules::members::MemberId;
use crate::service::LibraryManager;
use crate::utils::parse_number;

const MENU: &[&str] = &[
    "Library Management System",
    "1. Add a new book",
    "2. Remove an existing book",
    "3. Borrow a book",
    "4. Return a book",
    "5. List all available books",
    "6. List all borrowed books by a member",
    "7. Exit",
];

/// Outcome of one menu action; `Break` ends the session.
type Step = io::Result<ControlFlow<()>>;

/// What the user typed at an ID prompt.
enum Input {
    /// Input is exhausted
    Eof,
    /// Not a number; already reported to the user
    Invalid,
    Id(i64),
}

impl Input {
    /// Where the session goes when no ID was read.
    fn step(&self) -> ControlFlow<()> {
        match self {
            Self::Eof => ControlFlow::Break(()),
            Self::Invalid | Self::Id(_) => ControlFlow::Continue(()),
        }
    }
}

/// Line-oriented console session reading from `reader` and printing to `writer`.
pub struct Console<L, R, W> {
    library: L,
    reader: R,
    writer: W,
}

impl<L, R, W> Console<L, R, W>
where
    L: LibraryManager,
    R: BufRead,
    W: Write,
{
    pub fn new(library: L, reader: R, writer: W) -> Self {
        Self {
            library,
            reader,
            writer,
        }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// Hand back the library and writer once the session is over.
    pub fn into_parts(self) -> (L, W) {
        (self.library, self.writer)
    }

    /// Run the menu loop until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::debug!("console session started");

        loop {
            for line in MENU {
                writeln!(self.writer, "{line}")?;
            }

            let Some(input) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let Some(choice) = parse_number(&input) else {
                writeln!(self.writer, "Invalid input. Please enter a number.")?;
                continue;
            };

            let step = match choice {
                1 => self.add_book()?,
                2 => self.remove_book()?,
                3 => self.borrow_book()?,
                4 => self.return_book()?,
                5 => self.list_available_books()?,
                6 => self.list_borrowed_books()?,
                7 => {
                    writeln!(self.writer, "Exiting...")?;
                    ControlFlow::Break(())
                }
                _ => {
                    writeln!(self.writer, "Invalid choice, please try again.")?;
                    ControlFlow::Continue(())
                }
            };

            if step.is_break() {
                break;
            }
        }

        self.writer.flush()?;
        tracing::debug!("console session ended");
        Ok(())
    }

    fn add_book(&mut self) -> Step {
        let id = match self.prompt_id("Enter book ID: ", "book")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };

        let mut fields = Vec::with_capacity(3);
        for label in [
            "Enter book title: ",
            "Enter book author: ",
            "Enter book status (available/borrowed): ",
        ] {
            let Some(value) = self.prompt(label)? else {
                return Ok(ControlFlow::Break(()));
            };
            fields.push(value);
        }

        let result = Book::from_input(id, &fields[0], &fields[1], &fields[2])
            .and_then(|book| self.library.add_book(book));
        self.report("add", "adding book", "Book added successfully!", result)
    }

    fn remove_book(&mut self) -> Step {
        let id = match self.prompt_id("Enter book ID to remove: ", "book")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };

        let result = self.library.remove_book(id);
        self.report("remove", "removing book", "Book removed successfully!", result)
    }

    fn borrow_book(&mut self) -> Step {
        let book_id: BookId = match self.prompt_id("Enter book ID to borrow: ", "book")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };
        let member_id: MemberId = match self.prompt_id("Enter member ID: ", "member")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };

        let result = self.library.borrow_book(book_id, member_id);
        self.report("borrow", "borrowing book", "Book borrowed successfully!", result)
    }

    fn return_book(&mut self) -> Step {
        let book_id: BookId = match self.prompt_id("Enter book ID to return: ", "book")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };
        let member_id: MemberId = match self.prompt_id("Enter member ID: ", "member")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };

        let result = self.library.return_book(book_id, member_id);
        self.report("return", "returning book", "Book returned successfully!", result)
    }

    fn list_available_books(&mut self) -> Step {
        let books = self.library.list_available_books();
        if books.is_empty() {
            writeln!(self.writer, "No available books.")?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.writer, "Available books:")?;
        for book in books {
            writeln!(self.writer, "{book}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list_borrowed_books(&mut self) -> Step {
        let member_id = match self.prompt_id("Enter member ID: ", "member")? {
            Input::Id(id) => id,
            other => return Ok(other.step()),
        };

        let books = self.library.list_borrowed_books(member_id);
        if books.is_empty() {
            writeln!(self.writer, "No borrowed books.")?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.writer, "Borrowed books:")?;
        for book in books {
            writeln!(self.writer, "{book}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// they surface as ordinary invalid input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn prompt_id(&mut self, label: &str, kind: &str) -> io::Result<Input> {
        let Some(input) = self.prompt(label)? else {
            return Ok(Input::Eof);
        };

        match parse_number(&input) {
            Some(id) => Ok(Input::Id(id)),
            None => {
                writeln!(self.writer, "Invalid {kind} ID. Please enter a number.")?;
                Ok(Input::Invalid)
            }
        }
    }

    fn report(
        &mut self,
        operation: &'static str,
        action: &str,
        success: &str,
        result: Result<(), LibraryError>,
    ) -> Step {
        match result {
            Ok(()) => writeln!(self.writer, "{success}")?,
            Err(err) => {
                let error_id = Uuid::now_v7();
                tracing::warn!(
                    error_id = %error_id,
                    error_code = err.code(),
                    operation,
                    "library operation rejected: {err}"
                );
                writeln!(self.writer, "Error {action}: {err}")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}
