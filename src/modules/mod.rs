pub mod books;
pub mod members;

use libris_kernel::settings::LibrarySettings;

use crate::error::Result;
use crate::service::Library;

/// Build a library from configured seeds: members first, then books.
pub fn seed_library(settings: &LibrarySettings) -> Result<Library> {
    let mut library = Library::new();
    members::seed(&mut library, &settings.members)?;
    books::seed(&mut library, &settings.books)?;

    tracing::info!(
        members = library.member_count(),
        books = library.book_count(),
        "library seeded"
    );
    Ok(library)
}
