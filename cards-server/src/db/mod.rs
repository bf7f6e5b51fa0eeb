//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one statement per repository call
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Inserts use RETURNING so callers get the stored row back

pub mod pool;
pub mod repos;

pub use pool::{connect_and_migrate, StartupError, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;

/// Embedded schema migrations (workspace `migrations/` directory)
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
