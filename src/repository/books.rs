//! In-memory book storage.
//!
//! The catalog is an ordered `Vec<Book>` behind a single async `RwLock`.
//! Lookups are linear scans returning the first match in storage order, and
//! every mutation holds the write lock for its whole read-modify-write so
//! concurrent requests never lose updates.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{seed_books, Book, UpdateBook},
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Repository holding the three default books
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// All books in storage order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First book whose id matches
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    pub async fn exists(&self, id: &str) -> bool {
        self.books.read().await.iter().any(|book| book.id == id)
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a book verbatim, duplicate or empty ids included
    pub async fn create(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    /// Overwrite title, author and quantity of the first matching book
    pub async fn update(&self, id: &str, update: UpdateBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;

        book.apply_update(update);
        Ok(book.clone())
    }

    /// Take one copy of the first matching book out of stock.
    ///
    /// Later books sharing the id are left as they are.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;

        if !book.in_stock() {
            return Err(AppError::OutOfStock);
        }

        book.quantity -= 1;
        Ok(book.clone())
    }
}
