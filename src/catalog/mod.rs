//! In-memory book catalog split across logical submodules: seeding, read-only
//! queries, and the borrow/return transitions.

mod lending;
mod queries;
mod seed;

use tracing::debug;

use crate::models::Book;

/// Owns the ordered book list and the id counter. Books are kept in insertion
/// order and never removed.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// An empty catalog whose first book will get id 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new on-shelf book and return its id. No validation is applied.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> u32 {
        let id = self.next_id;
        self.books.push(Book::new(id, title, author, isbn));
        self.next_id += 1;
        debug!(id, title, "book added");
        id
    }

    /// Number of books ever added; books are never removed.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// `true` until the first book is added.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
