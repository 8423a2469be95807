use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, AppState};
use crate::cards::{Aspect, CardId};
use crate::deck::DeckStats;
use crate::rules::{aspect_summary, DeckValidation, DeckValidator, Stage};
use crate::store::{DeckCardRecord, DeckCardUpdate, DeckUpdate, NewDeck, NewDeckCard, SavedDeck};

/// Body of a successful delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Validator output for a posted deck list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    pub validation: DeckValidation,
    pub stage: Stage,
    pub stats: DeckStats,
    pub aspects: Vec<(Aspect, u32)>,
}

/// GET /api/decks
pub async fn list_decks(State(state): State<AppState>) -> ResponseJson<Vec<SavedDeck>> {
    let decks = state.decks.read().await;
    ResponseJson(decks.list().to_vec())
}

/// GET /api/decks/{id}
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<SavedDeck>, ApiError> {
    let decks = state.decks.read().await;
    Ok(ResponseJson(decks.get(&id)?.clone()))
}

/// POST /api/decks
pub async fn create_deck(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<NewDeck>,
) -> Result<ResponseJson<SavedDeck>, ApiError> {
    let mut decks = state.decks.write().await;
    Ok(ResponseJson(decks.create(payload)?))
}

/// PUT /api/decks/{id}
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(payload): axum::Json<DeckUpdate>,
) -> Result<ResponseJson<SavedDeck>, ApiError> {
    let mut decks = state.decks.write().await;
    Ok(ResponseJson(decks.update(&id, payload)?))
}

/// DELETE /api/decks/{id}
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<DeleteResponse>, ApiError> {
    let mut decks = state.decks.write().await;
    decks.delete(&id)?;
    Ok(ResponseJson(DeleteResponse {
        success: true,
        message: "Deck deleted successfully".into(),
    }))
}

/// POST /api/decks/{id}/cards
pub async fn add_deck_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(payload): axum::Json<NewDeckCard>,
) -> Result<(StatusCode, ResponseJson<DeckCardRecord>), ApiError> {
    let mut decks = state.decks.write().await;
    let record = decks.upsert_card(&id, payload)?;
    Ok((StatusCode::CREATED, ResponseJson(record)))
}

/// PUT /api/decks/{id}/cards/{card_id}
pub async fn update_deck_card(
    State(state): State<AppState>,
    Path((id, card_id)): Path<(String, String)>,
    axum::Json(payload): axum::Json<DeckCardUpdate>,
) -> Result<ResponseJson<DeckCardRecord>, ApiError> {
    let mut decks = state.decks.write().await;
    Ok(ResponseJson(decks.update_card(&id, &CardId::new(card_id), payload)?))
}

/// DELETE /api/decks/{id}/cards/{card_id}
pub async fn remove_deck_card(
    State(state): State<AppState>,
    Path((id, card_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut decks = state.decks.write().await;
    decks.remove_card(&id, &CardId::new(card_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/decks/validate
/// Validate a deck list without saving it
pub async fn validate_deck(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<NewDeck>,
) -> Result<ResponseJson<ValidationReport>, ApiError> {
    let deck = payload.to_state(&state.catalog)?;
    Ok(ResponseJson(ValidationReport {
        validation: state.validator.validate_deck(&deck),
        stage: state.validator.stage(&deck),
        stats: DeckStats::of(&deck),
        aspects: aspect_summary(&deck),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/decks", get(list_decks).post(create_deck))
        .route("/decks/validate", post(validate_deck))
        .route("/decks/{id}", get(get_deck).put(update_deck).delete(delete_deck))
        .route("/decks/{id}/cards", post(add_deck_card))
        .route(
            "/decks/{id}/cards/{card_id}",
            put(update_deck_card).delete(remove_deck_card),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ValidationIssue;
    use crate::store::NewDeckCard;

    fn line(card_id: &str, quantity: u8, is_leader: bool, is_base: bool) -> NewDeckCard {
        NewDeckCard {
            card_id: CardId::new(card_id),
            quantity,
            is_leader,
            is_base,
        }
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let state = AppState::sample(3);
        let ResponseJson(decks) = list_decks(State(state.clone())).await;
        assert_eq!(decks.len(), 2);

        let ResponseJson(deck) = get_deck(State(state.clone()), Path("2".into())).await.unwrap();
        assert_eq!(deck.name, "Luke's Heroism");

        let err = get_deck(State(state), Path("zzz".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Deck not found");
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let state = AppState::sample(3);
        let request = NewDeck {
            name: "Sith".into(),
            description: Some("Two dark lords".into()),
            cards: vec![line("1", 1, true, false), line("8", 1, true, false)],
        };

        let ResponseJson(created) = create_deck(State(state.clone()), axum::Json(request))
            .await
            .unwrap();
        assert_eq!(created.cards.len(), 2);

        let update = DeckUpdate {
            name: Some("Sith Lords".into()),
            ..DeckUpdate::default()
        };
        let ResponseJson(updated) =
            update_deck(State(state.clone()), Path(created.id.clone()), axum::Json(update))
                .await
                .unwrap();
        assert_eq!(updated.name, "Sith Lords");
        assert_eq!(updated.description, "Two dark lords");

        let ResponseJson(deleted) = delete_deck(State(state.clone()), Path(created.id.clone()))
            .await
            .unwrap();
        assert!(deleted.success);
        assert_eq!(deleted.message, "Deck deleted successfully");

        let err = delete_deck(State(state), Path(created.id)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_with_unknown_card() {
        let state = AppState::sample(3);
        let request = NewDeck {
            name: "Bad".into(),
            description: None,
            cards: vec![line("77", 1, false, false)],
        };
        let err = create_deck(State(state), axum::Json(request)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Card with id 77 not found");
    }

    #[tokio::test]
    async fn test_deck_card_lifecycle() {
        let state = AppState::sample(3);

        let (status, ResponseJson(record)) = add_deck_card(
            State(state.clone()),
            Path("2".into()),
            axum::Json(line("7", 2, false, false)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.deck_id, "2");
        assert_eq!(record.quantity, 2);

        let update = DeckCardUpdate {
            quantity: 3,
            is_leader: false,
            is_base: false,
        };
        let ResponseJson(record) = update_deck_card(
            State(state.clone()),
            Path(("2".into(), "7".into())),
            axum::Json(update),
        )
        .await
        .unwrap();
        assert_eq!(record.quantity, 3);

        let status = remove_deck_card(State(state.clone()), Path(("2".into(), "7".into())))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.decks.read().await.get("2").unwrap().cards.len(), 2);

        let err = remove_deck_card(State(state), Path(("2".into(), "7".into())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Card not found in deck");
    }

    #[tokio::test]
    async fn test_deck_card_errors() {
        let state = AppState::sample(3);

        let err = add_deck_card(
            State(state.clone()),
            Path("zzz".into()),
            axum::Json(line("7", 1, false, false)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Deck not found");

        let err = add_deck_card(
            State(state.clone()),
            Path("1".into()),
            axum::Json(line("404", 1, false, false)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Card with id 404 not found");

        let update: DeckCardUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update.quantity, 1);
        let err = update_deck_card(State(state), Path(("1".into(), "8".into())), axum::Json(update))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Card not found in deck");
    }

    #[tokio::test]
    async fn test_validate_endpoint() {
        let state = AppState::sample(3);
        let request = NewDeck {
            name: "Check".into(),
            description: None,
            cards: vec![
                line("1", 1, true, false),
                line("8", 1, true, false),
                line("6", 3, false, false),
            ],
        };

        let ResponseJson(report) = validate_deck(State(state), axum::Json(request))
            .await
            .unwrap();
        assert!(!report.validation.valid);
        assert_eq!(report.validation.issue, Some(ValidationIssue::BaseMissing));
        assert_eq!(report.stage, Stage::Base);
        assert_eq!(report.stats.total, 5);
        assert!((report.validation.completion_percent - 52.0).abs() < 1e-9);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["stage"], "base");
    }
}
