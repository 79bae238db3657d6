//! Libris application library
//!
//! In-memory book inventory and lending service, plus the console adapter
//! that drives it.

pub mod console;
pub mod error;
pub mod modules;
pub mod service;
pub mod utils;

pub use console::Console;
pub use error::{LibraryError, Result};
pub use modules::books::{Book, BookId, BookStatus};
pub use modules::members::{Member, MemberId};
pub use modules::seed_library;
pub use service::{Library, LibraryManager};
