//! String newtype ids for board entities.
//!
//! Ids arriving in a snapshot keep whatever value the backend assigned.
//! `new()` generates a ULID for entities created locally (optimistic
//! creates that have not round-tripped through the server yet).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed id
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing id value (e.g. one assigned by the backend)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifies a board
    BoardId
);
string_id!(
    /// Identifies a card
    CardId
);
string_id!(
    /// Identifies a column
    ColumnId
);
string_id!(
    /// Identifies a board label
    LabelId
);
string_id!(
    /// Identifies a user (member, assignee, creator)
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_ulid() {
        let id = CardId::new();
        // ULIDs are 26 Crockford base32 characters
        assert_eq!(id.as_str().len(), 26);
        assert_ne!(id, CardId::new());
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = ColumnId::from_string("col-1");
        assert_eq!(id.as_str(), "col-1");
        assert_eq!(id.to_string(), "col-1");
        assert_eq!(id, ColumnId::from("col-1"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = BoardId::from_string("board-9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"board-9\"");
        let parsed: BoardId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
