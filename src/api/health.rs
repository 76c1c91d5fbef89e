//! Welcome and liveness endpoints

use axum::Json;

use crate::models::MessageResponse;

use super::IndentedJson;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn home() -> IndentedJson<MessageResponse> {
    IndentedJson(MessageResponse::new("Welcome to the Book Store"))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = MessageResponse)
    )
)]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}
