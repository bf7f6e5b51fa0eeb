//! Favorite endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::collection;
use super::goals::UserParams;
use crate::db::{Favorite, FavoriteRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Deserialize)]
pub struct AddFavoriteParams {
    pub user_id: i64,
    pub card_id: i64,
}

/// POST /favorites/?user_id=&card_id=
async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddFavoriteParams>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let favorite = FavoriteRepo::new(&state.pool)
        .add(params.user_id, params.card_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// GET /favorites/?user_id=
async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = FavoriteRepo::new(&state.pool)
        .list_for_user(params.user_id)
        .await?;
    Ok(Json(favorites))
}

/// Favorite routes
pub fn router() -> Router<Arc<AppState>> {
    collection("/favorites", get(list_favorites).post(add_favorite))
}
