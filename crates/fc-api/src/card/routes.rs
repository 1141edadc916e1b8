//! Read-only card endpoints.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{ApiState, error::ApiError, metrics};

use super::model::Card;

/// Create the card routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/cards", get(get_all_cards))
        .route("/cards/{id}", get(get_card_by_id))
}

/// Get all cards
async fn get_all_cards(State(state): State<ApiState>) -> Json<Arc<[Card]>> {
    let cards = state.catalog.shared();
    metrics::record_cards_served(cards.len());

    Json(cards)
}

/// Get card by ID
async fn get_card_by_id(
    State(state): State<ApiState>,
    Path(id): Path<u32>,
) -> Result<Json<Card>, ApiError> {
    let card = state
        .catalog
        .get(id)
        .cloned()
        .ok_or(ApiError::CardNotFound(id))?;
    metrics::record_cards_served(1);

    Ok(Json(card))
}
