//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::core::DeckError;

/// Error returned by handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
        }
    }
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::DeckNotFound(_) => ApiError::NotFound("Deck not found".into()),
            // Card ids only reach the store through request bodies.
            DeckError::CardNotFound(id) => {
                ApiError::BadRequest(format!("Card with id {} not found", id.as_str()))
            }
            DeckError::NotInDeck(_) => ApiError::NotFound("Card not found in deck".into()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = self.message(), "request rejected");
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
