//! UpdateMemberRole command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::{MemberRole, UserId};
use serde::{Deserialize, Serialize};

/// Change a member's role. The member's permission strings are re-derived
/// from the new role so the two never disagree inside a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRole {
    /// The member's user id
    pub user_id: UserId,
    /// The new role
    pub role: MemberRole,
}

impl UpdateMemberRole {
    /// Create a new UpdateMemberRole command
    pub fn new(user_id: impl Into<UserId>, role: MemberRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

impl Apply for UpdateMemberRole {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(member) = board.members.iter_mut().find(|m| m.user_id == self.user_id) else {
            tracing::debug!("update member role ignored, member not found: {}", self.user_id);
            return Outcome::Ignored;
        };

        member.role = self.role;
        member.permissions = self.role.permissions();

        tracing::debug!("Member role updated: {} -> {:?}", self.user_id, self.role);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_update_member_role_syncs_permissions() {
        let mut store = store_with_board();

        let outcome = UpdateMemberRole::new("user-1", MemberRole::Admin).apply(&mut store);

        assert!(outcome.was_applied());
        let member = store.board().unwrap().find_member(&"user-1".into()).unwrap().clone();
        assert_eq!(member.role, MemberRole::Admin);
        assert_eq!(member.permissions, vec!["read", "write", "admin"]);
    }

    #[test]
    fn test_update_member_role_missing_is_noop() {
        let mut store = store_with_board();

        let outcome = UpdateMemberRole::new("ghost", MemberRole::Viewer).apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
    }
}
