//! Book domain methods on Repository

use std::{collections::HashSet, path::Path};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

impl Repository {
    /// Build a catalog from the given books, in order
    pub fn new(books: Vec<Book>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                return Err(AppError::Validation(format!(
                    "Duplicate book id {} in catalog",
                    book.id
                )));
            }
        }

        Ok(Self {
            books: books.into(),
        })
    }

    /// Catalog shipped with the server
    pub fn seeded() -> Self {
        Self {
            books: vec![
                Book::new(1, "How to avoid a climate disaster", "Bill Gates", 24.99),
                Book::new(2, "My book of tricks", "Will Velida", 9.99),
            ]
            .into(),
        }
    }

    /// Load a catalog from a JSON array of books
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let books: Vec<Book> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} books from {}", books.len(), path.display());
        Self::new(books)
    }

    /// All books, in catalog order
    pub fn books_list(&self) -> &[Book] {
        &self.books
    }

    /// First book with the given id (linear scan)
    pub fn books_find_by_id(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }
}
