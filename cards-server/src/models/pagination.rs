//! Offset/limit pagination

use serde::Deserialize;

use super::ValidationError;

/// Maximum items per request
pub const MAX_LIMIT: i64 = 50;

/// Default items per request
pub const DEFAULT_LIMIT: i64 = 30;

/// Validated offset/limit window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip
    pub skip: i64,
    /// Rows to return (1..=50)
    pub limit: i64,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Negative skip is rejected
    /// - Limit is clamped to 1..=50
    pub fn new(skip: i64, limit: i64) -> Result<Self, ValidationError> {
        if skip < 0 {
            return Err(ValidationError::OutOfRange { field: "skip", min: 0 });
        }

        Ok(Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Pagination::try_from(PaginationParams::default()).unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 30);
    }

    #[test]
    fn clamps_limit() {
        assert_eq!(Pagination::new(0, 0).unwrap().limit, 1);
        assert_eq!(Pagination::new(0, 999).unwrap().limit, 50);
        assert_eq!(Pagination::new(10, 25).unwrap().limit, 25);
    }

    #[test]
    fn rejects_negative_skip() {
        let err = Pagination::new(-1, 10).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "skip", .. }));
    }
}
