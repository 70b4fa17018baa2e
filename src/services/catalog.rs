//! Catalog lookup service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in the catalog
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books_list().to_vec()
    }

    /// Get a book by ID
    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        tracing::debug!("Looking up book id={}", id);
        self.repository
            .books_find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub fn count(&self) -> usize {
        self.repository.len()
    }
}
