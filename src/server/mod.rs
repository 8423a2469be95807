//! Mock card and deck REST service.
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/api/cards` | filtered, paginated catalog |
//! | GET | `/api/cards/{id}` | one card |
//! | GET | `/api/types`, `/api/aspects` | filter values |
//! | GET, POST | `/api/decks` | saved decks |
//! | GET, PUT, DELETE | `/api/decks/{id}` | one saved deck |
//! | POST | `/api/decks/{id}/cards` | add or overwrite one card line |
//! | PUT, DELETE | `/api/decks/{id}/cards/{card_id}` | one card line |
//! | POST | `/api/decks/validate` | validator report for a deck list |
//!
//! Errors are JSON `{"error": "..."}` with 404 for unknown ids and 400 for
//! bad input.

pub mod cards;
pub mod config;
pub mod decks;
pub mod error;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

use crate::cards::CardCatalog;
use crate::core::{DeckRules, IdRng};
use crate::rules::StandardValidator;
use crate::store::DeckStore;

pub use config::{ServerConfig, DEFAULT_BIND_ADDR};
pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CardCatalog>,
    pub decks: Arc<RwLock<DeckStore>>,
    pub validator: Arc<StandardValidator>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, decks: DeckStore, rules: DeckRules) -> Self {
        Self {
            catalog,
            decks: Arc::new(RwLock::new(decks)),
            validator: Arc::new(StandardValidator::new(rules)),
        }
    }

    /// Sample catalog and decks under the standard rules.
    #[must_use]
    pub fn sample(seed: u64) -> Self {
        Self::with_rng(IdRng::new(seed))
    }

    fn with_rng(rng: IdRng) -> Self {
        let catalog = Arc::new(CardCatalog::sample());
        let decks = DeckStore::with_sample_decks(Arc::clone(&catalog), rng);
        Self::new(catalog, decks, DeckRules::default())
    }
}

/// All routes under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new().merge(cards::router()).merge(decks::router());
    Router::new().nest("/api", api).with_state(state)
}

/// Bind `config.bind_addr` and serve the sample data until the task ends.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let state = AppState::with_rng(config.id_rng());
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, build_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_on_ephemeral_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, build_router(AppState::sample(5))).await
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        stream
            .write_all(b"GET /api/aspects HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"Villainy\""));
        server.abort();
    }
}
