//! AddColumn command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::Column;
use serde::{Deserialize, Serialize};

/// Append a column to the board. The column's `position` is overwritten with
/// its index at the end of the column array; `MoveColumn` reorders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    /// The column to add
    pub column: Column,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(column: Column) -> Self {
        Self { column }
    }
}

impl Apply for AddColumn {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        let mut column = self.column.clone();
        column.position = board.columns.len();
        board.columns.push(column);

        store.refresh_filter();
        tracing::debug!("Column added: {}", self.column.id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;
    use crate::store::BoardStore;

    #[test]
    fn test_add_column_appends() {
        let mut store = store_with_board();
        let before = store.board().unwrap().columns.len();

        let outcome = AddColumn::new(Column::new("Review", before)).apply(&mut store);

        assert!(outcome.was_applied());
        let board = store.board().unwrap();
        assert_eq!(board.columns.len(), before + 1);
        assert_eq!(board.columns.last().unwrap().name, "Review");
        assert_eq!(board.columns.last().unwrap().position, before);
    }

    #[test]
    fn test_add_column_without_board_is_noop() {
        let mut store = BoardStore::new();
        let outcome = AddColumn::new(Column::new("Review", 0)).apply(&mut store);
        assert_eq!(outcome, Outcome::Ignored);
    }
}
