//! Repository layer for catalog storage

pub mod books;

use crate::config::CatalogConfig;

/// Main repository struct holding every store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository, seeding the catalog when configured to
    pub fn new(config: &CatalogConfig) -> Self {
        let books = if config.seed {
            books::BooksRepository::seeded()
        } else {
            books::BooksRepository::empty()
        };

        Self { books }
    }
}
