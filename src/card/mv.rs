//! MoveCard command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a card between columns (or within one) to a requested index.
///
/// The card is looked up in the source column only; a card living elsewhere
/// is not touched. After the move both columns carry dense card positions
/// 0..N-1 in array order and accurate card counts. The insertion index is
/// clamped to the destination length, so an out-of-range position appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    /// The card to move
    pub card_id: CardId,
    /// Column the card is expected to be in
    pub from_column_id: ColumnId,
    /// Column to receive the card
    pub to_column_id: ColumnId,
    /// Requested index in the destination's card array
    pub new_position: usize,
}

impl MoveCard {
    /// Create a new MoveCard command
    pub fn new(
        card_id: impl Into<CardId>,
        from_column_id: impl Into<ColumnId>,
        to_column_id: impl Into<ColumnId>,
        new_position: usize,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            from_column_id: from_column_id.into(),
            to_column_id: to_column_id.into(),
            new_position,
        }
    }
}

impl Apply for MoveCard {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        // Resolve both columns up front so a bad destination cannot strand
        // the card outside the board.
        let Some(source_idx) = board.columns.iter().position(|c| c.id == self.from_column_id)
        else {
            tracing::debug!("move card ignored, source column not found: {}", self.from_column_id);
            return Outcome::Ignored;
        };
        let Some(dest_idx) = board.columns.iter().position(|c| c.id == self.to_column_id) else {
            tracing::debug!("move card ignored, destination column not found: {}", self.to_column_id);
            return Outcome::Ignored;
        };
        let Some(card_idx) = board.columns[source_idx]
            .cards
            .iter()
            .position(|c| c.id == self.card_id)
        else {
            tracing::debug!(
                "move card ignored, card {} not in column {}",
                self.card_id,
                self.from_column_id
            );
            return Outcome::Ignored;
        };

        let card = {
            let source = &mut board.columns[source_idx];
            let card = source.cards.remove(card_idx);
            source.card_count = source.cards.len();
            source.renumber_cards();
            card
        };

        let dest = &mut board.columns[dest_idx];
        let insert_at = self.new_position.min(dest.cards.len());
        dest.cards.insert(insert_at, card);
        dest.card_count = dest.cards.len();
        dest.renumber_cards();

        store.refresh_filter();
        tracing::debug!(
            "Card moved: {} from {} to {} at {}",
            self.card_id,
            self.from_column_id,
            self.to_column_id,
            insert_at
        );
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_move_card_between_columns() {
        let mut store = store_with_board();

        // Todo: [card-a(0), card-b(1)], Done: []
        let outcome = MoveCard::new("card-a", "todo", "done", 0).apply(&mut store);
        assert!(outcome.was_applied());

        let board = store.board().unwrap();
        let todo = board.find_column(&"todo".into()).unwrap();
        let done = board.find_column(&"done".into()).unwrap();

        assert_eq!(todo.cards.len(), 1);
        assert_eq!(todo.cards[0].id.as_str(), "card-b");
        assert_eq!(todo.cards[0].position, 0);
        assert_eq!(todo.card_count, 1);

        assert_eq!(done.cards.len(), 1);
        assert_eq!(done.cards[0].id.as_str(), "card-a");
        assert_eq!(done.cards[0].position, 0);
        assert_eq!(done.card_count, 1);
    }

    #[test]
    fn test_move_card_out_of_range_position_appends() {
        let mut store = store_with_board();

        MoveCard::new("card-a", "todo", "done", 99).apply(&mut store);

        let board = store.board().unwrap();
        let done = board.find_column(&"done".into()).unwrap();
        assert_eq!(done.cards.len(), 1);
        assert_eq!(done.cards[0].position, 0);
    }

    #[test]
    fn test_move_card_within_column_renumbers_dense() {
        let mut store = store_with_board();

        // Reorder within Todo: card-a to index 1
        MoveCard::new("card-a", "todo", "todo", 1).apply(&mut store);

        let board = store.board().unwrap();
        let todo = board.find_column(&"todo".into()).unwrap();
        let ids: Vec<&str> = todo.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["card-b", "card-a"]);
        let positions: Vec<usize> = todo.cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_move_card_not_in_source_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        // card-a lives in todo, not done
        let outcome = MoveCard::new("card-a", "done", "todo", 0).apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }

    #[test]
    fn test_move_card_missing_destination_keeps_card() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = MoveCard::new("card-a", "todo", "nonexistent", 0).apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }
}
