//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Store API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        // Health
        health::home,
        health::ping,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::checkout_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::UpdateBook,
            crate::models::book::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Welcome and liveness endpoints"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
