//! AddMember command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::Member;
use serde::{Deserialize, Serialize};

/// Append a member to the board's member list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMember {
    /// The member to add
    pub member: Member,
}

impl AddMember {
    /// Create a new AddMember command
    pub fn new(member: Member) -> Self {
        Self { member }
    }
}

impl Apply for AddMember {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        board.members.push(self.member.clone());

        tracing::debug!("Member added: {}", self.member.user_id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;
    use crate::types::MemberRole;

    #[test]
    fn test_add_member() {
        let mut store = store_with_board();
        let before = store.board().unwrap().members.len();

        let member = Member::new("user-2", "Sam Park", "sam@example.com", MemberRole::Editor);
        let outcome = AddMember::new(member).apply(&mut store);

        assert!(outcome.was_applied());
        let board = store.board().unwrap();
        assert_eq!(board.members.len(), before + 1);
        assert!(board.find_member(&"user-2".into()).is_some());
    }
}
