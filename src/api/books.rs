//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, UpdateBook},
    AppState,
};

use super::{ApiJson, IndentedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every book in storage order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> IndentedJson<Vec<Book>> {
    IndentedJson(state.services.catalog.list_books().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<IndentedJson<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(IndentedJson(book))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(book): ApiJson<Book>,
) -> (StatusCode, Json<Book>) {
    let created = state.services.catalog.create_book(book).await;
    (StatusCode::CREATED, Json(created))
}

/// Replace a book's title, author and quantity
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<ApiJson<UpdateBook>, AppError>,
) -> AppResult<IndentedJson<Book>> {
    // Unknown ids are reported before the body is looked at
    state.services.catalog.ensure_exists(&id).await?;
    let ApiJson(update) = payload?;

    let book = state.services.catalog.update_book(&id, update).await?;
    Ok(IndentedJson(book))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book checked out, quantity decremented", body = Book),
        (status = 400, description = "Book is out of stock", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<IndentedJson<Book>> {
    let book = state.services.catalog.checkout_book(&id).await?;
    Ok(IndentedJson(book))
}
