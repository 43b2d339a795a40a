//! Catalog service: book rules applied before every store mutation

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

    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get(id)
    }

    /// Validate and insert a new book, returning its identifier
    pub fn create_book(&self, book: Book) -> AppResult<String> {
        check(&book)?;
        self.repository.books.create(book)
    }

    /// Validate and replace the book at `id`, returning where it now lives
    pub fn update_book(&self, id: &str, book: Book) -> AppResult<String> {
        check(&book)?;
        self.repository.books.update(id, book)
    }

    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id)
    }

    pub fn count(&self) -> usize {
        self.repository.books.len()
    }
}

fn check(book: &Book) -> AppResult<()> {
    let violations = book.violations();
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!("Rejected book {:?}: {}", book.id, violations);
        Err(AppError::Validation(violations))
    }
}
