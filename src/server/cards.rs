use axum::{
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
    Router,
};
use tracing::debug;

use super::{error::ApiError, AppState};
use crate::cards::{Aspect, Card, CardId, CardQuery, CardType, Page};

/// GET /api/cards
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> ResponseJson<Page<Card>> {
    let page = state.catalog.query(&query);
    debug!(total = page.meta.total, page = page.meta.page, "card query");
    ResponseJson(page)
}

/// GET /api/cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Card>, ApiError> {
    state
        .catalog
        .get(&CardId::new(id))
        .cloned()
        .map(ResponseJson)
        .ok_or_else(|| ApiError::NotFound("Card not found".into()))
}

/// GET /api/types
pub async fn list_types() -> ResponseJson<Vec<String>> {
    ResponseJson(CardType::LISTED.iter().map(|t| t.name().to_string()).collect())
}

/// GET /api/aspects
pub async fn list_aspects() -> ResponseJson<Vec<&'static str>> {
    ResponseJson(Aspect::PRIMARY.iter().map(|a| a.name()).collect())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards))
        .route("/cards/{id}", get(get_card))
        .route("/types", get(list_types))
        .route("/aspects", get(list_aspects))
}
