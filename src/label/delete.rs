//! DeleteLabel command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::LabelId;
use serde::{Deserialize, Serialize};

/// Remove a board label by id. Card-side snapshots of the label survive
/// until the backend strips them and a fresh snapshot is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLabel {
    /// The label to delete
    pub label_id: LabelId,
}

impl DeleteLabel {
    /// Create a new DeleteLabel command
    pub fn new(label_id: impl Into<LabelId>) -> Self {
        Self {
            label_id: label_id.into(),
        }
    }
}

impl Apply for DeleteLabel {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        let before = board.labels.len();
        board.labels.retain(|l| l.id != self.label_id);
        if board.labels.len() == before {
            tracing::debug!("delete label ignored, label not found: {}", self.label_id);
            return Outcome::Ignored;
        }

        tracing::debug!("Label deleted: {}", self.label_id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_delete_label() {
        let mut store = store_with_board();

        let outcome = DeleteLabel::new("label-1").apply(&mut store);

        assert!(outcome.was_applied());
        assert!(store.board().unwrap().find_label(&"label-1".into()).is_none());
    }

    #[test]
    fn test_delete_label_missing_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = DeleteLabel::new("ghost").apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }
}
