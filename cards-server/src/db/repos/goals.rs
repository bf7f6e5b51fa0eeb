//! Goal repository

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::GoalText;

/// Goal record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Goal repository
pub struct GoalRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a goal for a user.
    ///
    /// The user is not looked up first; a missing user surfaces as the
    /// foreign key violation from the database.
    pub async fn create(
        &self,
        user_id: i64,
        text: &GoalText,
        target_date: NaiveDate,
    ) -> Result<Goal, DbError> {
        let goal = sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (user_id, text, target_date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, text, target_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(text.as_str())
        .bind(target_date)
        .fetch_one(self.pool)
        .await?;

        Ok(goal)
    }

    /// List a user's goals in creation order.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Goal>, DbError> {
        let goals = sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, user_id, text, target_date, created_at
            FROM goals
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::UserRepo;
    use crate::models::Username;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn lists_only_own_goals_in_creation_order(pool: PgPool) {
        let users = UserRepo::new(&pool);
        let alice = users.create(&Username::new("alice").unwrap()).await.unwrap();
        let bob = users.create(&Username::new("bob").unwrap()).await.unwrap();

        let repo = GoalRepo::new(&pool);
        let first = repo
            .create(alice.id, &GoalText::new("Run 5k").unwrap(), date(2026, 12, 1))
            .await
            .unwrap();
        repo.create(bob.id, &GoalText::new("Read more").unwrap(), date(2026, 11, 1))
            .await
            .unwrap();
        let second = repo
            .create(alice.id, &GoalText::new("Learn English").unwrap(), date(2026, 6, 1))
            .await
            .unwrap();

        let goals = repo.list_for_user(alice.id).await.unwrap();
        assert_eq!(goals, vec![first, second]);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn missing_user_is_a_database_error(pool: PgPool) {
        let err = GoalRepo::new(&pool)
            .create(4242, &GoalText::new("Orphan").unwrap(), date(2026, 1, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Sqlx(_)));
        assert!(!err.is_unique_violation());
    }
}
