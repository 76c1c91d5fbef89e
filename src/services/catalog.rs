//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, UpdateBook},
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

    /// List every book in storage order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Number of books in the catalog
    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let result = self.repository.books.get_by_id(id).await;
        if result.is_err() {
            tracing::debug!(book_id = %id, "Book lookup missed");
        }
        result
    }

    /// Resolve an ID without copying the record
    pub async fn ensure_exists(&self, id: &str) -> AppResult<()> {
        if self.repository.books.exists(id).await {
            Ok(())
        } else {
            tracing::debug!(book_id = %id, "Book lookup missed");
            Err(AppError::book_not_found())
        }
    }

    /// Append a new book
    pub async fn create_book(&self, book: Book) -> Book {
        let created = self.repository.books.create(book).await;
        tracing::info!(
            book_id = %created.id,
            quantity = created.quantity,
            "Catalog create: added \"{}\"",
            created.title
        );
        created
    }

    /// Replace title, author and quantity of an existing book
    pub async fn update_book(&self, id: &str, update: UpdateBook) -> AppResult<Book> {
        let updated = self.repository.books.update(id, update).await?;
        tracing::info!(book_id = %id, quantity = updated.quantity, "Catalog update");
        Ok(updated)
    }

    /// Check out one copy of a book
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        match self.repository.books.checkout(id).await {
            Ok(book) => {
                tracing::info!(book_id = %id, remaining = book.quantity, "Book checked out");
                Ok(book)
            }
            Err(AppError::OutOfStock) => {
                tracing::warn!(book_id = %id, "Checkout refused: out of stock");
                Err(AppError::OutOfStock)
            }
            Err(e) => Err(e),
        }
    }
}
