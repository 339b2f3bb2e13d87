//! DeleteCard command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::CardId;
use serde::{Deserialize, Serialize};

/// Remove a card by id from whichever column contains it. The remaining
/// cards in that column are renumbered dense and `card_count` is re-synced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCard {
    /// The card to delete
    pub card_id: CardId,
}

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

impl Apply for DeleteCard {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };

        let mut removed = 0;
        for column in &mut board.columns {
            let before = column.cards.len();
            column.cards.retain(|card| card.id != self.card_id);
            if column.cards.len() < before {
                column.card_count = column.cards.len();
                column.renumber_cards();
                removed += before - column.cards.len();
            }
        }

        if removed == 0 {
            tracing::debug!("delete card ignored, card not found: {}", self.card_id);
            return Outcome::Ignored;
        }

        store.refresh_filter();
        tracing::debug!("Card deleted: {}", self.card_id);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::UpdateCard;
    use crate::store::test_support::store_with_board;

    #[test]
    fn test_delete_card_removes_and_decrements_count() {
        let mut store = store_with_board();
        let before = store.board().unwrap().find_column(&"todo".into()).unwrap().card_count;

        let outcome = DeleteCard::new("card-a").apply(&mut store);

        assert!(outcome.was_applied());
        let column = store.board().unwrap().find_column(&"todo".into()).unwrap().clone();
        assert_eq!(column.card_count, before - 1);
        assert!(column.cards.iter().all(|c| c.id.as_str() != "card-a"));
        assert_eq!(column.card_count, column.cards.len());
        // Survivors renumbered dense
        assert_eq!(column.cards[0].position, 0);
    }

    #[test]
    fn test_delete_card_missing_id_is_noop() {
        let mut store = store_with_board();
        let before = store.board().unwrap().clone();

        let outcome = DeleteCard::new("ghost").apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), before.as_ref());
    }

    #[test]
    fn test_delete_then_update_leaves_board_unchanged() {
        let mut store = store_with_board();

        DeleteCard::new("card-a").apply(&mut store);
        let snapshot = store.board().unwrap().clone();

        let outcome = UpdateCard::new("card-a")
            .with_title("Back from the dead")
            .apply(&mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.board().unwrap().as_ref(), snapshot.as_ref());
    }
}
