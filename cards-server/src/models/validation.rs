//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its accepted range
    OutOfRange { field: &'static str, min: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, min } => {
                write!(f, "{} must be at least {}", field, min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `s` and check it against the non-empty and length rules shared by
/// every free-text field.
pub(crate) fn bounded_text(
    s: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "username",
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "username exceeds maximum length of 50 characters"
        );

        let err = ValidationError::OutOfRange { field: "skip", min: 0 };
        assert_eq!(err.to_string(), "skip must be at least 0");
    }

    #[test]
    fn bounded_text_counts_chars_not_bytes() {
        // Cyrillic letters are two bytes each in UTF-8
        let word = "я".repeat(10);
        assert_eq!(bounded_text(&word, "text", 10).unwrap(), word);
        assert!(bounded_text(&word, "text", 9).is_err());
    }
}
