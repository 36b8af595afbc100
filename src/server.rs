//! Inbound HTTP surface.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::RelayError;
use crate::relay::Relay;

/// Detail returned for every failed call. The underlying cause is only logged.
pub const GENERIC_ERROR_DETAIL: &str = "An error occurred while processing your request.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageChatRequest {
    pub message: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Failure at the inbound boundary. Always rendered as a 500 with a fixed detail.
#[derive(Debug)]
pub struct ApiError(RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, status = ?self.0.status_code(), "An error occurred");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: GENERIC_ERROR_DETAIL.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the router with permissive CORS and request tracing.
pub fn router(relay: Arc<dyn Relay>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/image", post(chat_image))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}

async fn chat(
    State(relay): State<Arc<dyn Relay>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = relay.send_text_prompt(&request.message).await?;
    Ok(Json(ChatResponse { response }))
}

async fn chat_image(
    State(relay): State<Arc<dyn Relay>>,
    Json(request): Json<ImageChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = relay
        .send_image_prompt(&request.message, &request.image_url)
        .await?;
    Ok(Json(ChatResponse { response }))
}
