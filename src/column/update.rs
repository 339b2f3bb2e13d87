//! UpdateColumn command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Merge partial fields into a column found by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumn {
    /// The column to update
    pub id: ColumnId,
    /// New column name
    pub name: Option<String>,
    /// New color (`Some(None)` clears it)
    pub color: Option<Option<String>>,
}

impl UpdateColumn {
    /// Create a new UpdateColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set or clear the color
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }
}

impl Apply for UpdateColumn {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(column) = board.find_column_mut(&self.id) else {
            tracing::debug!("update column ignored, column not found: {}", self.id);
            return Outcome::Ignored;
        };

        if let Some(name) = &self.name {
            column.name = name.clone();
        }
        if let Some(color) = &self.color {
            column.color = color.clone();
        }

        store.refresh_filter();
        tracing::debug!("Column updated: {}", self.id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_update_column_name() {
        let mut store = store_with_board();

        let outcome = UpdateColumn::new("todo")
            .with_name("Backlog")
            .apply(&mut store);

        assert!(outcome.was_applied());
        let column = store.board().unwrap().find_column(&"todo".into()).unwrap().clone();
        assert_eq!(column.name, "Backlog");
        // Cards untouched
        assert_eq!(column.cards.len(), 2);
    }

    #[test]
    fn test_update_column_clear_color() {
        let mut store = store_with_board();

        UpdateColumn::new("todo").with_color(None).apply(&mut store);

        let column = store.board().unwrap().find_column(&"todo".into()).unwrap().clone();
        assert!(column.color.is_none());
    }

    #[test]
    fn test_update_column_missing_id_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = UpdateColumn::new("ghost").with_name("X").apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }
}
