//! Card endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::collection;
use crate::db::{Card, CardRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CardText, Pagination, PaginationParams};

/// Create card request
#[derive(Deserialize)]
pub struct CreateCardRequest {
    pub text: String,
}

/// POST /cards/ - add a card to the shared pool
async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let text = CardText::new(&req.text)?;
    let card = CardRepo::new(&state.pool).create(&text).await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /cards/?skip=&limit= - page through the pool
async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let page = Pagination::try_from(params)?;
    let cards = CardRepo::new(&state.pool).list(page).await?;
    Ok(Json(cards))
}

/// Card routes
pub fn router() -> Router<Arc<AppState>> {
    collection("/cards", get(list_cards).post(create_card))
}
