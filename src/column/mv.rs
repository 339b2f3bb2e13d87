//! MoveColumn command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Reorder a column to a requested index, then renumber all column positions
/// dense 0..N-1 in array order. An out-of-range index moves the column to
/// the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveColumn {
    /// The column to move
    pub column_id: ColumnId,
    /// Requested index in the board's column array
    pub new_position: usize,
}

impl MoveColumn {
    /// Create a new MoveColumn command
    pub fn new(column_id: impl Into<ColumnId>, new_position: usize) -> Self {
        Self {
            column_id: column_id.into(),
            new_position,
        }
    }
}

impl Apply for MoveColumn {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(index) = board.columns.iter().position(|c| c.id == self.column_id) else {
            tracing::debug!("move column ignored, column not found: {}", self.column_id);
            return Outcome::Ignored;
        };

        let column = board.columns.remove(index);
        let insert_at = self.new_position.min(board.columns.len());
        board.columns.insert(insert_at, column);
        for (i, column) in board.columns.iter_mut().enumerate() {
            column.position = i;
        }

        store.refresh_filter();
        tracing::debug!("Column moved: {} to {}", self.column_id, insert_at);
        Outcome::Applied
    }
}
