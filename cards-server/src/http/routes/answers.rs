//! Answer endpoints

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
use super::goals::UserParams;
use crate::db::{Answer, AnswerRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Record answer request
#[derive(Deserialize)]
pub struct CreateAnswerRequest {
    pub goal_id: i64,
    pub date: NaiveDate,
    pub is_yes: bool,
}

#[derive(Deserialize)]
pub struct ListAnswersParams {
    pub user_id: i64,
    pub goal_id: i64,
}

/// POST /answers/?user_id= - record a daily yes/no
async fn add_answer(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
    Json(req): Json<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<Answer>), ApiError> {
    let answer = AnswerRepo::new(&state.pool)
        .add(params.user_id, req.goal_id, req.date, req.is_yes)
        .await?;

    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /answers/?user_id=&goal_id=
async fn list_answers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListAnswersParams>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    let answers = AnswerRepo::new(&state.pool)
        .list_for_goal(params.user_id, params.goal_id)
        .await?;
    Ok(Json(answers))
}

/// Answer routes
pub fn router() -> Router<Arc<AppState>> {
    collection("/answers", get(list_answers).post(add_answer))
}
