//! Goal endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::collection;
use crate::db::{Goal, GoalRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::GoalText;

#[derive(Deserialize)]
pub struct UserParams {
    pub user_id: i64,
}

/// Create goal request
#[derive(Deserialize)]
pub struct CreateGoalRequest {
    pub text: String,
    pub target_date: NaiveDate,
}

/// POST /goals/?user_id= - create a goal for a user
async fn create_goal(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    let text = GoalText::new(&req.text)?;
    let goal = GoalRepo::new(&state.pool)
        .create(params.user_id, &text, req.target_date)
        .await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /goals/?user_id= - a user's goals in creation order
async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = GoalRepo::new(&state.pool).list_for_user(params.user_id).await?;
    Ok(Json(goals))
}

/// Goal routes
pub fn router() -> Router<Arc<AppState>> {
    collection("/goals", get(list_goals).post(create_goal))
}
