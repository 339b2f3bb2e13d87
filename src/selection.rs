//! Transient UI-only state: selection, modals, drag-and-drop.
//!
//! Nothing here is persisted or mirrored to the backend. Selected and
//! dragged entities are value snapshots taken at interaction time, not live
//! references into the board.

use crate::types::{Card, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Selection and drag state layered over the board snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub selected_card: Option<Card>,
    pub selected_column: Option<Column>,
    pub card_modal_open: bool,
    pub column_modal_open: bool,
    pub add_card_modal_open: bool,
    pub add_list_modal_open: bool,
    pub dragged_card: Option<Card>,
    pub dragged_column: Option<Column>,
    pub drop_target: Option<DropTarget>,
}

impl Selection {
    /// True when any drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragged_card.is_some() || self.dragged_column.is_some()
    }

    /// True when any modal is open
    pub fn any_modal_open(&self) -> bool {
        self.card_modal_open
            || self.column_modal_open
            || self.add_card_modal_open
            || self.add_list_modal_open
    }
}

/// Advisory drop location for drag-and-drop visual feedback.
///
/// Purely visual; committing a drop is the caller issuing a
/// `MoveCard`/`MoveColumn` mutation, which the container never does on its
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub column_id: ColumnId,
    pub position: usize,
}

impl DropTarget {
    pub fn new(column_id: impl Into<ColumnId>, position: usize) -> Self {
        Self {
            column_id: column_id.into(),
            position,
        }
    }
}
