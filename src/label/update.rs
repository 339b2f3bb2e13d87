//! UpdateLabel command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::LabelId;
use serde::{Deserialize, Serialize};

/// Merge partial fields into a board label found by id.
///
/// Card-side label snapshots are value copies and are deliberately left
/// untouched; the backend re-syncs them and the next board load picks the
/// change up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLabel {
    /// The label to update
    pub id: LabelId,
    /// New name
    pub name: Option<String>,
    /// New color
    pub color: Option<String>,
    /// New description (`Some(None)` clears it)
    pub description: Option<Option<String>>,
}

impl UpdateLabel {
    /// Create a new UpdateLabel command
    pub fn new(id: impl Into<LabelId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
            description: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }
}

impl Apply for UpdateLabel {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(label) = board.labels.iter_mut().find(|l| l.id == self.id) else {
            tracing::debug!("update label ignored, label not found: {}", self.id);
            return Outcome::Ignored;
        };

        if let Some(name) = &self.name {
            label.name = name.clone();
        }
        if let Some(color) = &self.color {
            label.color = color.clone();
        }
        if let Some(description) = &self.description {
            label.description = description.clone();
        }

        tracing::debug!("Label updated: {}", self.id);
        Outcome::Applied
    }
}
