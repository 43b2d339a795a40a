//! Repository layer: the in-memory book store

pub mod books;

pub use books::BookStore;

/// Main repository struct holding every store the services use
#[derive(Clone, Default)]
pub struct Repository {
    pub books: BookStore,
}

impl Repository {
    /// Create a repository around an existing book store
    pub fn new(books: BookStore) -> Self {
        Self { books }
    }
}
