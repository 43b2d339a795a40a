//! In-memory book store keyed by identifier.
//!
//! The map sits behind a read-write lock: lookups share the read lock, while
//! every mutation performs its existence check and its insert/remove under a
//! single write guard.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Shared handle to the book map
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<HashMap<String, Book>>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Each mutation is a complete map operation under one guard, so a
    // poisoned lock never exposes a half-applied change.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All books, in no particular order
    pub fn list(&self) -> Vec<Book> {
        self.read().values().cloned().collect()
    }

    /// Insert a new book; fails if its id is already taken
    pub fn create(&self, book: Book) -> AppResult<String> {
        let mut books = self.write();
        if books.contains_key(&book.id) {
            tracing::debug!("Book {} already exists", book.id);
            return Err(AppError::Conflict);
        }
        let id = book.id.clone();
        books.insert(id.clone(), book);
        tracing::debug!("Created book {}", id);
        Ok(id)
    }

    /// Get a book by id
    pub fn get(&self, id: &str) -> AppResult<Book> {
        self.read().get(id).cloned().ok_or(AppError::NotFound)
    }

    /// Replace the book stored at `id`.
    ///
    /// The replacement is keyed by its own `id` field, so an update may move
    /// the record to a new identifier. Returns the identifier it now lives at.
    pub fn update(&self, id: &str, book: Book) -> AppResult<String> {
        let mut books = self.write();
        if books.remove(id).is_none() {
            tracing::debug!("Book {} not present for update", id);
            return Err(AppError::NotFound);
        }
        let new_id = book.id.clone();
        if new_id != id {
            tracing::debug!("Book {} relocated to {}", id, new_id);
        }
        books.insert(new_id.clone(), book);
        Ok(new_id)
    }

    /// Remove a book by id
    pub fn delete(&self, id: &str) -> AppResult<()> {
        match self.write().remove(id) {
            Some(_) => {
                tracing::debug!("Deleted book {}", id);
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    /// Drop every book
    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
