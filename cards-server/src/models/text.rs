//! Goal and card text validation

use super::validation::{bounded_text, ValidationError};

/// Maximum length for goal text
pub const MAX_GOAL_TEXT_LEN: usize = 200;

/// Maximum length for card text
pub const MAX_CARD_TEXT_LEN: usize = 500;

/// Validated goal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalText(String);

impl GoalText {
    /// Create goal text: trimmed, non-empty, max 200 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text(s, "goal text", MAX_GOAL_TEXT_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated card text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText(String);

impl CardText {
    /// Create card text: trimmed, non-empty, max 500 characters.
    ///
    /// # Example
    /// ```
    /// use cards_server::models::CardText;
    ///
    /// assert!(CardText::new("Small steps every day").is_ok());
    /// assert!(CardText::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text(s, "card text", MAX_CARD_TEXT_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
