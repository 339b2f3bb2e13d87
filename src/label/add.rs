//! AddLabel command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::Label;
use serde::{Deserialize, Serialize};

/// Append a label to the board's label list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLabel {
    /// The label to add
    pub label: Label,
}

impl AddLabel {
    /// Create a new AddLabel command
    pub fn new(label: Label) -> Self {
        Self { label }
    }
}

impl Apply for AddLabel {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        board.labels.push(self.label.clone());

        tracing::debug!("Label added: {}", self.label.id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_add_label() {
        let mut store = store_with_board();
        let before = store.board().unwrap().labels.len();

        let outcome = AddLabel::new(Label::new("urgent", "#FF5630")).apply(&mut store);

        assert!(outcome.was_applied());
        let board = store.board().unwrap();
        assert_eq!(board.labels.len(), before + 1);
        assert_eq!(board.labels.last().unwrap().name, "urgent");
    }
}
