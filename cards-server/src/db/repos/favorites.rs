//! Favorite repository - per-user bookmarks of cards

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Favorite record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub card_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Favorite repository
pub struct FavoriteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Bookmark a card for a user.
    ///
    /// A repeated (user, card) pair fails on the UNIQUE constraint and is
    /// returned untranslated as `DbError::Sqlx`.
    pub async fn add(&self, user_id: i64, card_id: i64) -> Result<Favorite, DbError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, card_id)
            VALUES ($1, $2)
            RETURNING id, user_id, card_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(card_id)
        .fetch_one(self.pool)
        .await?;

        Ok(favorite)
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Favorite>, DbError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, card_id, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(favorites)
    }
}
