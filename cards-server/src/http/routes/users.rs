//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::collection;
use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Pagination, PaginationParams, Username};

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// POST /users/ - create a user, 409 when the username is taken
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let username = Username::new(&req.username)?;
    let user = UserRepo::new(&state.pool).create(&username).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Query for listing users, optionally narrowed to one username
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub username: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /users/ - list users, or GET /users/?username= to look one up
///
/// An unknown username yields an empty list, not 404.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let repo = UserRepo::new(&state.pool);

    if let Some(raw) = params.username.as_deref() {
        let username = Username::new(raw)?;
        let found = repo.get_by_username(&username).await?;
        return Ok(Json(found.into_iter().collect()));
    }

    let page = Pagination::try_from(PaginationParams {
        skip: params.skip,
        limit: params.limit,
    })?;
    Ok(Json(repo.list(page).await?))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(user))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    collection("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
}
