//! BoardStore - the authoritative in-memory copy of one board.
//!
//! The store owns the current board snapshot plus the derived filtered card
//! list and transient selection state. It is constructed explicitly by the
//! application root and passed down (no module-level singleton); create one
//! per board-detail view and drop it (or `reset()`) on navigation away.
//!
//! All operations run synchronously to completion on the caller's thread.
//! Mutations are applied optimistically: the store updates immediately and
//! the caller mirrors the change to the backend afterwards. There is no
//! built-in rollback; see [`crate::mutation::ReconcilePolicy`].
//!
//! The snapshot lives behind an `Arc`: readers clone the `Arc` cheaply, and
//! mutations go through `Arc::make_mut`, so a clone taken before a mutation
//! keeps observing the old snapshot. That is the re-render-safety property
//! the UI layer depends on.

use std::sync::Arc;

use crate::card::{AddCard, DeleteCard, MoveCard, UpdateCard};
use crate::column::{AddColumn, DeleteColumn, MoveColumn, UpdateColumn};
use crate::label::{AddLabel, DeleteLabel, UpdateLabel};
use crate::member::{AddMember, RemoveMember, UpdateMemberRole};
use crate::mutation::{Apply, Mutation, Outcome};
use crate::search;
use crate::selection::{DropTarget, Selection};
use crate::types::{Board, Card, CardId, Column, ColumnId, Label, LabelId, Member, MemberRole, UserId};

/// In-memory state container for a single board detail view.
#[derive(Debug, Default)]
pub struct BoardStore {
    board: Option<Arc<Board>>,
    loading: bool,
    error: Option<String>,
    search_term: String,
    filtered_cards: Vec<Card>,
    selection: Selection,
}

impl BoardStore {
    /// Create an empty store: no board, no error, inactive filter.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current board snapshot, if one is loaded
    pub fn board(&self) -> Option<&Arc<Board>> {
        self.board.as_ref()
    }

    /// Clone the current snapshot handle for a consumer to hold across
    /// subsequent mutations
    pub fn snapshot(&self) -> Option<Arc<Board>> {
        self.board.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The active search term. Read together with [`filtered_cards`]: a blank
    /// term means the filter is inactive, which also presents as an empty
    /// filtered list.
    ///
    /// [`filtered_cards`]: Self::filtered_cards
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Cards matching the active search term, in column-then-position order.
    /// Empty both when the filter is inactive and when nothing matches;
    /// check [`Self::search_term`] to tell the two apart.
    pub fn filtered_cards(&self) -> &[Card] {
        &self.filtered_cards
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // =========================================================================
    // Status and lifecycle
    // =========================================================================

    /// Replace the whole snapshot (or clear it with `None`). Clears any
    /// stored error and recomputes the filtered card list.
    pub fn set_board(&mut self, board: Option<Board>) {
        let board_id = board.as_ref().map(|b| b.id.to_string());
        self.board = board.map(Arc::new);
        self.error = None;
        self.refresh_filter();
        tracing::debug!("Board set in store: {:?}", board_id);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Store (or clear) an externally reported error. Always drops the
    /// loading flag, matching the load-failed transition it is used for.
    pub fn set_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            tracing::warn!("Board store error: {}", message);
        }
        self.error = error;
        self.loading = false;
    }

    /// Restore all state to initial empty values: board, flags, search,
    /// selection and drag.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Board store reset");
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Store the term and synchronously recompute the filtered card list
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh_filter();
    }

    /// Recompute the filtered card list from the current snapshot and term
    pub fn filter_cards(&mut self) {
        self.refresh_filter();
    }

    /// Clear the term and the filtered list together
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.filtered_cards.clear();
        tracing::debug!("Search cleared");
    }

    pub(crate) fn refresh_filter(&mut self) {
        self.filtered_cards = match &self.board {
            Some(board) => search::matching_cards(board, &self.search_term),
            None => Vec::new(),
        };
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Apply any mutation command
    pub fn apply(&mut self, mutation: &Mutation) -> Outcome {
        mutation.apply(self)
    }

    pub fn add_card(&mut self, column_id: impl Into<ColumnId>, card: Card) -> Outcome {
        AddCard::new(column_id, card).apply(self)
    }

    pub fn update_card(&mut self, update: UpdateCard) -> Outcome {
        update.apply(self)
    }

    pub fn delete_card(&mut self, card_id: impl Into<CardId>) -> Outcome {
        DeleteCard::new(card_id).apply(self)
    }

    pub fn move_card(
        &mut self,
        card_id: impl Into<CardId>,
        from_column_id: impl Into<ColumnId>,
        to_column_id: impl Into<ColumnId>,
        new_position: usize,
    ) -> Outcome {
        MoveCard::new(card_id, from_column_id, to_column_id, new_position).apply(self)
    }

    pub fn add_column(&mut self, column: Column) -> Outcome {
        AddColumn::new(column).apply(self)
    }

    pub fn update_column(&mut self, update: UpdateColumn) -> Outcome {
        update.apply(self)
    }

    pub fn delete_column(&mut self, column_id: impl Into<ColumnId>) -> Outcome {
        DeleteColumn::new(column_id).apply(self)
    }

    pub fn move_column(&mut self, column_id: impl Into<ColumnId>, new_position: usize) -> Outcome {
        MoveColumn::new(column_id, new_position).apply(self)
    }

    pub fn add_member(&mut self, member: Member) -> Outcome {
        AddMember::new(member).apply(self)
    }

    pub fn remove_member(&mut self, user_id: impl Into<UserId>) -> Outcome {
        RemoveMember::new(user_id).apply(self)
    }

    pub fn update_member_role(
        &mut self,
        user_id: impl Into<UserId>,
        role: MemberRole,
    ) -> Outcome {
        UpdateMemberRole::new(user_id, role).apply(self)
    }

    pub fn add_label(&mut self, label: Label) -> Outcome {
        AddLabel::new(label).apply(self)
    }

    pub fn update_label(&mut self, update: UpdateLabel) -> Outcome {
        update.apply(self)
    }

    pub fn delete_label(&mut self, label_id: impl Into<LabelId>) -> Outcome {
        DeleteLabel::new(label_id).apply(self)
    }

    /// Mutable access to the snapshot for command applies. Clones the board
    /// first if a consumer still holds the previous `Arc`.
    pub(crate) fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut().map(Arc::make_mut)
    }

    // =========================================================================
    // Selection and drag state (pure setters, no validation)
    // =========================================================================

    pub fn set_selected_card(&mut self, card: Option<Card>) {
        self.selection.selected_card = card;
    }

    pub fn set_selected_column(&mut self, column: Option<Column>) {
        self.selection.selected_column = column;
    }

    pub fn set_card_modal_open(&mut self, open: bool) {
        self.selection.card_modal_open = open;
    }

    pub fn set_column_modal_open(&mut self, open: bool) {
        self.selection.column_modal_open = open;
    }

    pub fn set_add_card_modal_open(&mut self, open: bool) {
        self.selection.add_card_modal_open = open;
    }

    pub fn set_add_list_modal_open(&mut self, open: bool) {
        self.selection.add_list_modal_open = open;
    }

    pub fn set_dragged_card(&mut self, card: Option<Card>) {
        self.selection.dragged_card = card;
    }

    pub fn set_dragged_column(&mut self, column: Option<Column>) {
        self.selection.dragged_column = column;
    }

    pub fn set_drop_target(&mut self, target: Option<DropTarget>) {
        self.selection.drop_target = target;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::CardLabel;

    /// Two columns ("todo" with two cards, "done" empty), one member, one
    /// label. Fixed ids so tests can reference entities directly.
    pub(crate) fn sample_board() -> Board {
        let label = Label {
            id: LabelId::from("label-1"),
            name: "api".to_string(),
            color: "#0052CC".to_string(),
            description: None,
        };

        let card_a = Card {
            id: CardId::from("card-a"),
            position: 0,
            ..Card::new("API Design")
        }
        .with_labels(vec![CardLabel::new("label-1", "api", "#0052CC")]);

        let card_b = Card {
            id: CardId::from("card-b"),
            position: 1,
            ..Card::new("Fix login bug")
        }
        .with_description("Session cookie expires too early");

        let todo = Column {
            id: ColumnId::from("todo"),
            ..Column::new("Todo", 0)
        }
        .with_cards(vec![card_a, card_b]);

        let done = Column {
            id: ColumnId::from("done"),
            ..Column::new("Done", 1)
        };

        let member = Member::new("user-1", "Alex Kim", "alex@example.com", MemberRole::Editor);

        Board::new("Test Board")
            .with_columns(vec![todo, done])
            .with_members(vec![member])
            .with_labels(vec![label])
    }

    pub(crate) fn store_with_board() -> BoardStore {
        let mut store = BoardStore::new();
        store.set_board(Some(sample_board()));
        store
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{sample_board, store_with_board};
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = BoardStore::new();
        assert!(store.board().is_none());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.search_term(), "");
        assert!(store.filtered_cards().is_empty());
    }

    #[test]
    fn test_set_board_clears_error() {
        let mut store = BoardStore::new();
        store.set_error(Some("fetch failed".to_string()));
        assert_eq!(store.error(), Some("fetch failed"));

        store.set_board(Some(sample_board()));
        assert!(store.error().is_none());
        assert!(store.board().is_some());
    }

    #[test]
    fn test_set_error_drops_loading() {
        let mut store = BoardStore::new();
        store.set_loading(true);
        store.set_error(Some("boom".to_string()));
        assert!(!store.is_loading());

        // Clearing the error also drops loading
        store.set_loading(true);
        store.set_error(None);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_set_board_none_clears_snapshot() {
        let mut store = store_with_board();
        store.set_board(None);
        assert!(store.board().is_none());
        assert!(store.filtered_cards().is_empty());
    }

    #[test]
    fn test_search_term_drives_filter() {
        let mut store = store_with_board();

        store.set_search_term("api");
        assert_eq!(store.filtered_cards().len(), 1);
        assert_eq!(store.filtered_cards()[0].title, "API Design");

        // Case-insensitive
        store.set_search_term("API");
        assert_eq!(store.filtered_cards().len(), 1);

        store.set_search_term("");
        assert!(store.filtered_cards().is_empty());
    }

    #[test]
    fn test_filter_tracks_card_mutations() {
        let mut store = store_with_board();
        store.set_search_term("api");
        assert_eq!(store.filtered_cards().len(), 1);

        store.add_card("todo", Card::new("api gateway"));
        assert_eq!(store.filtered_cards().len(), 2);

        store.delete_card("card-a");
        assert_eq!(store.filtered_cards().len(), 1);
        assert_eq!(store.filtered_cards()[0].title, "api gateway");
    }

    #[test]
    fn test_clear_search() {
        let mut store = store_with_board();
        store.set_search_term("api");
        assert!(!store.filtered_cards().is_empty());

        store.clear_search();
        assert_eq!(store.search_term(), "");
        assert!(store.filtered_cards().is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = store_with_board();
        store.set_loading(true);
        store.set_search_term("api");
        store.set_selected_card(Some(Card::new("X")));
        store.set_drop_target(Some(DropTarget::new("todo", 1)));

        store.reset();

        assert!(store.board().is_none());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.search_term(), "");
        assert!(store.filtered_cards().is_empty());
        assert_eq!(*store.selection(), Selection::default());
    }

    #[test]
    fn test_held_snapshot_survives_mutation() {
        let mut store = store_with_board();
        let held = store.snapshot().unwrap();
        let held_count = held.find_column(&"todo".into()).unwrap().card_count;

        store.add_card("todo", Card::new("New task"));

        // The held snapshot still shows the old state
        assert_eq!(
            held.find_column(&"todo".into()).unwrap().card_count,
            held_count
        );
        // The store shows the new one
        assert_eq!(
            store.board().unwrap().find_column(&"todo".into()).unwrap().card_count,
            held_count + 1
        );
    }

    #[test]
    fn test_selection_setters() {
        let mut store = store_with_board();
        let card = store.board().unwrap().find_card(&"card-a".into()).unwrap().clone();

        store.set_selected_card(Some(card.clone()));
        store.set_card_modal_open(true);
        store.set_dragged_card(Some(card));
        store.set_drop_target(Some(DropTarget::new("done", 0)));

        assert!(store.selection().any_modal_open());
        assert!(store.selection().is_dragging());
        assert_eq!(
            store.selection().drop_target.as_ref().unwrap().column_id.as_str(),
            "done"
        );

        // Committing a drop is the caller's job; clearing drag state is too
        store.set_dragged_card(None);
        store.set_drop_target(None);
        assert!(!store.selection().is_dragging());
    }

    #[test]
    fn test_apply_mutation_value() {
        let mut store = store_with_board();
        let mutation: Mutation = DeleteCard::new("card-a").into();

        let outcome = store.apply(&mutation);

        assert!(outcome.was_applied());
        assert!(store.board().unwrap().find_card(&"card-a".into()).is_none());
        // Idempotent apply: second run is a no-op
        assert_eq!(store.apply(&mutation), Outcome::Ignored);
    }
}
