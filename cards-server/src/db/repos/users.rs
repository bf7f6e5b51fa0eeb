//! User repository
//!
//! - create: plain INSERT, unique violation on username becomes Conflict
//! - get / get_by_username / list: single SELECTs

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{Pagination, Username};

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a user.
    ///
    /// Relies on the UNIQUE constraint instead of a lookup first, so two
    /// concurrent requests for the same name cannot both succeed.
    pub async fn create(&self, username: &Username) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
                resource: "user",
                id: username.as_str().to_owned(),
            },
            other => DbError::Sqlx(other),
        })
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    /// Look a user up by exact username.
    pub async fn get_by_username(&self, username: &Username) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE username = $1")
            .bind(username.as_str())
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// List users in creation order.
    pub async fn list(&self, page: Pagination) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
