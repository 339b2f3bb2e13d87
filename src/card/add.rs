//! AddCard command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::{Card, ColumnId};
use serde::{Deserialize, Serialize};

/// Append a card to the end of a column.
///
/// The card's `position` is overwritten with its index at the end of the
/// column's card array. An unknown column id leaves the board unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCard {
    /// The column to receive the card
    pub column_id: ColumnId,
    /// The card to add
    pub card: Card,
}

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column_id: impl Into<ColumnId>, card: Card) -> Self {
        Self {
            column_id: column_id.into(),
            card,
        }
    }
}

impl Apply for AddCard {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(column) = board.find_column_mut(&self.column_id) else {
            tracing::debug!("add card ignored, column not found: {}", self.column_id);
            return Outcome::Ignored;
        };

        let mut card = self.card.clone();
        card.position = column.cards.len();
        column.cards.push(card);
        column.card_count = column.cards.len();

        store.refresh_filter();
        tracing::debug!("Card added: {} in column {}", self.card.id, self.column_id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_add_card_appends_and_bumps_count() {
        let mut store = store_with_board();
        let before = store.board().unwrap().find_column(&"todo".into()).unwrap().card_count;

        let outcome = AddCard::new("todo", Card::new("New task")).apply(&mut store);

        assert!(outcome.was_applied());
        let column = store.board().unwrap().find_column(&"todo".into()).unwrap().clone();
        assert_eq!(column.card_count, before + 1);
        assert_eq!(column.cards.last().unwrap().title, "New task");
        assert_eq!(column.cards.last().unwrap().position, column.cards.len() - 1);
        assert_eq!(column.card_count, column.cards.len());
    }

    #[test]
    fn test_add_card_unknown_column_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = AddCard::new("nonexistent-column", Card::new("Lost")).apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }

    #[test]
    fn test_add_card_without_board_is_noop() {
        let mut store = BoardStore::new();
        let outcome = AddCard::new("todo", Card::new("Task")).apply(&mut store);
        assert_eq!(outcome, Outcome::Ignored);
        assert!(store.board().is_none());
    }

    #[test]
    fn test_add_card_leaves_other_columns_unchanged() {
        let mut store = store_with_board();
        let done_before = store.board().unwrap().find_column(&"done".into()).unwrap().clone();

        AddCard::new("todo", Card::new("Task")).apply(&mut store);

        let done_after = store.board().unwrap().find_column(&"done".into()).unwrap();
        assert_eq!(*done_after, done_before);
    }
}
