//! Database startup: pool creation plus schema migrations
//!
//! Both CLI entry points (`serve` and `seed`) need a pool over a schema that
//! has the users/goals/cards/favorites/answers tables, so they go through
//! [`connect_and_migrate`].

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::MIGRATOR;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Failure while bringing the database up
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Open a pool and apply every pending migration before handing it out.
///
/// Migrations are tracked in `_sqlx_migrations`, so calling this on an
/// up-to-date database is a no-op.
pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, StartupError> {
    let pool = create_pool(database_url, max_connections).await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!(max_connections, "Database ready, migrations applied");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_a_connect_error() {
        let err = connect_and_migrate("not a database url", 1).await.unwrap_err();
        assert!(matches!(err, StartupError::Connect(_)));
        assert!(err.to_string().starts_with("failed to connect to database"));
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p cards-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn repeated_startup_sees_all_tables() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

        connect_and_migrate(&url, 1).await.expect("first startup failed");
        let pool = connect_and_migrate(&url, 1).await.expect("second startup failed");

        let (tables,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM information_schema.tables
            WHERE table_name IN ('users', 'goals', 'cards', 'favorites', 'answers')
            "#,
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");

        assert_eq!(tables, 5);
    }
}
