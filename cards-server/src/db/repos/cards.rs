//! Card repository - the shared pool of motivational cards

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{CardText, Pagination};

/// Card record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Card {
    pub id: i64,
    pub text: String,
}

/// Card repository
pub struct CardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, text: &CardText) -> Result<Card, DbError> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (text)
            VALUES ($1)
            RETURNING id, text
            "#,
        )
        .bind(text.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(card)
    }

    /// List cards by id with offset/limit.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Card>, DbError> {
        let cards = sqlx::query_as::<_, Card>(
            r#"
            SELECT id, text
            FROM cards
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(cards)
    }

    /// Number of cards in the pool.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cards")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
