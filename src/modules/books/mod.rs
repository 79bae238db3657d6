pub mod models;

pub use models::{Book, BookId, BookStatus};

use libris_kernel::settings::BookSeed;

use crate::error::Result;
use crate::service::LibraryManager;

/// Validate configured books and add them to the library, in order.
pub fn seed<L: LibraryManager + ?Sized>(library: &mut L, seeds: &[BookSeed]) -> Result<()> {
    for seed in seeds {
        let book = Book::from_input(seed.id, &seed.title, &seed.author, &seed.status)?;
        library.add_book(book)?;
        tracing::debug!(book_id = seed.id, title = %seed.title, "seeded book");
    }
    Ok(())
}
