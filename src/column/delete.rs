//! DeleteColumn command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Remove a column (and the cards it contains) from the board, then renumber
/// the remaining columns dense 0..N-1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteColumn {
    /// The column to delete
    pub column_id: ColumnId,
}

impl DeleteColumn {
    /// Create a new DeleteColumn command
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

impl Apply for DeleteColumn {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        let before = board.columns.len();
        board.columns.retain(|c| c.id != self.column_id);
        if board.columns.len() == before {
            tracing::debug!("delete column ignored, column not found: {}", self.column_id);
            return Outcome::Ignored;
        }
        for (i, column) in board.columns.iter_mut().enumerate() {
            column.position = i;
        }

        // Deleted cards must drop out of the filtered list too
        store.refresh_filter();
        tracing::debug!("Column deleted: {}", self.column_id);
        Outcome::Applied
    }
}
