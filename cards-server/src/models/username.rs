//! Username validation

use super::validation::{bounded_text, ValidationError};

/// Maximum length for usernames (matches the VARCHAR(50) column)
pub const MAX_USERNAME_LEN: usize = 50;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 50 characters
    ///
    /// # Example
    /// ```
    /// use cards_server::models::Username;
    ///
    /// assert!(Username::new("diana").is_ok());
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text(s, "username", MAX_USERNAME_LEN).map(Self)
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = Username::new("  diana ").unwrap();
        assert_eq!(name.as_str(), "diana");
    }

    #[test]
    fn rejects_empty() {
        let err = Username::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        assert!(Username::new(&"a".repeat(50)).is_ok());

        let err = Username::new(&"a".repeat(51)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }
}
