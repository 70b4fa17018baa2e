//! Repository layer: the in-memory book catalog

pub mod books;

use std::sync::Arc;

use crate::models::Book;

/// Read-only catalog, fixed once constructed
#[derive(Clone, Debug)]
pub struct Repository {
    books: Arc<[Book]>,
}

impl Repository {
    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
