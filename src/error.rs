//! Error types for the board state container

use thiserror::Error;

/// Result type for board state operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur around the board state container.
///
/// The default mutation path never returns these: not-found conditions
/// degrade to silent no-ops (see [`crate::mutation::Outcome`]). This taxonomy
/// exists for callers that opt into strict handling via
/// [`crate::mutation::Outcome::ok_or`] and for snapshot decoding at the
/// loading boundary.
#[derive(Debug, Error)]
pub enum BoardError {
    /// No board snapshot is loaded
    #[error("no board loaded")]
    BoardNotLoaded,

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Member not found
    #[error("member not found: {user_id}")]
    MemberNotFound { user_id: String },

    /// Label not found
    #[error("label not found: {id}")]
    LabelNotFound { id: String },

    /// Snapshot failed to decode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a card-not-found error
    pub fn card_not_found(id: impl Into<String>) -> Self {
        Self::CardNotFound { id: id.into() }
    }

    /// Create a column-not-found error
    pub fn column_not_found(id: impl Into<String>) -> Self {
        Self::ColumnNotFound { id: id.into() }
    }

    /// Create a member-not-found error
    pub fn member_not_found(user_id: impl Into<String>) -> Self {
        Self::MemberNotFound {
            user_id: user_id.into(),
        }
    }

    /// Create a label-not-found error
    pub fn label_not_found(id: impl Into<String>) -> Self {
        Self::LabelNotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::card_not_found("abc123");
        assert_eq!(err.to_string(), "card not found: abc123");
        assert_eq!(BoardError::BoardNotLoaded.to_string(), "no board loaded");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<crate::types::Board>("not json").unwrap_err();
        let err: BoardError = parse_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
