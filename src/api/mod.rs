//! API handlers for the Book Store REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::any::Any;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::MessageResponse, AppState};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// JSON body extractor whose rejections become `AppError::BadRequest`.
///
/// The body is decoded whatever `Content-Type` the client sent, and a
/// literal `null` yields the zero-valued payload.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice::<Option<T>>(&bytes)?;
        Ok(ApiJson(value.unwrap_or_default()))
    }
}

/// JSON response pretty-printed with a four-space indent
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(128);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

        match self.0.serialize(&mut ser) {
            Ok(()) => ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], buf).into_response(),
            Err(e) => {
                tracing::error!("Response serialization failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    e.to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Catch-all for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(MessageResponse::new("Internal Server Error")),
    )
        .into_response()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let routes = Router::new()
        .route("/", get(health::home))
        .route("/ping", get(health::ping))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .patch(books::checkout_book),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
