//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, auto-committed
//! - INSERT ... RETURNING for refresh-after-insert
//! - Lists ordered by id, which is creation order

pub mod answers;
pub mod cards;
pub mod favorites;
pub mod goals;
pub mod users;

pub use answers::{Answer, AnswerRepo};
pub use cards::{Card, CardRepo};
pub use favorites::{Favorite, FavoriteRepo};
pub use goals::{Goal, GoalRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("already exists: {resource} '{id}'")]
    Conflict { resource: &'static str, id: String },
}

impl DbError {
    /// Whether the underlying database error is a unique-constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_unique_violation(),
            Self::Conflict { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_unique_violation() {
        let err = DbError::NotFound {
            resource: "user",
            id: "7".into(),
        };
        assert!(!err.is_unique_violation());
        assert_eq!(err.to_string(), "not found: user '7'");
    }

    #[test]
    fn conflict_is_unique_violation() {
        let err = DbError::Conflict {
            resource: "user",
            id: "diana".into(),
        };
        assert!(err.is_unique_violation());
        assert!(!DbError::Sqlx(sqlx::Error::RowNotFound).is_unique_violation());
    }
}
