//! RemoveMember command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Remove a member by user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveMember {
    /// The member's user id
    pub user_id: UserId,
}

impl RemoveMember {
    /// Create a new RemoveMember command
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl Apply for RemoveMember {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        let before = board.members.len();
        board.members.retain(|m| m.user_id != self.user_id);
        if board.members.len() == before {
            tracing::debug!("remove member ignored, member not found: {}", self.user_id);
            return Outcome::Ignored;
        }

        tracing::debug!("Member removed: {}", self.user_id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_remove_member() {
        let mut store = store_with_board();

        let outcome = RemoveMember::new("user-1").apply(&mut store);

        assert!(outcome.was_applied());
        assert!(store.board().unwrap().find_member(&"user-1".into()).is_none());
    }

    #[test]
    fn test_remove_member_missing_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = RemoveMember::new("ghost").apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }
}
