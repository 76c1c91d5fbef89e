//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record in the catalog.
///
/// Missing fields in a request body fall back to their zero value, and
/// `id` is taken verbatim from the caller (uniqueness is not enforced).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Caller-supplied identifier
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "The Alchemist")]
    pub title: String,
    #[schema(example = "Paulo Coelho")]
    pub author: String,
    /// Copies in stock
    #[schema(example = 10)]
    pub quantity: i64,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }

    /// Overwrite the descriptive fields, keeping the id
    pub fn apply_update(&mut self, update: UpdateBook) {
        self.title = update.title;
        self.author = update.author;
        self.quantity = update.quantity;
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Update request body. An `id` in the payload is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

/// Books present at process start
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "The Alchemist", "Paulo Coelho", 10),
        Book::new("2", "The Monk Who Sold His Ferrari", "Robin Sharma", 5),
        Book::new("3", "The Secret", "Rhonnda Byrne", 7),
    ]
}

/// Plain `{"message": ...}` body used by the informational endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
