//! Answer repository - daily yes/no check-ins against a goal

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Answer record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Answer {
    pub id: i64,
    pub user_id: i64,
    pub goal_id: i64,
    pub date: NaiveDate,
    pub is_yes: bool,
}

/// Answer repository
pub struct AnswerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record one answer. At most one answer exists per (user, goal, date).
    pub async fn add(
        &self,
        user_id: i64,
        goal_id: i64,
        date: NaiveDate,
        is_yes: bool,
    ) -> Result<Answer, DbError> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (user_id, goal_id, date, is_yes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, goal_id, date, is_yes
            "#,
        )
        .bind(user_id)
        .bind(goal_id)
        .bind(date)
        .bind(is_yes)
        .fetch_one(self.pool)
        .await?;

        Ok(answer)
    }

    pub async fn list_for_goal(&self, user_id: i64, goal_id: i64) -> Result<Vec<Answer>, DbError> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, user_id, goal_id, date, is_yes
            FROM answers
            WHERE user_id = $1 AND goal_id = $2
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .bind(goal_id)
        .fetch_all(self.pool)
        .await?;

        Ok(answers)
    }
}
