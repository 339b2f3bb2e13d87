//! UpdateCard command

use crate::mutation::{Apply, Outcome};
use crate::store::BoardStore;
use crate::types::{CardId, CardLabel, Priority, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merge partial fields into a card, found by id across all columns.
///
/// Clearable fields use nested options: `None` = don't change,
/// `Some(None)` = clear, `Some(Some(x))` = set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    /// The card to update
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<Option<String>>,
    /// New priority
    pub priority: Option<Option<Priority>>,
    /// New completion flag
    pub completed: Option<bool>,
    /// New archived flag
    pub archived: Option<bool>,
    /// New due date
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// New start date
    pub start_date: Option<Option<DateTime<Utc>>>,
    /// Replace all label snapshots
    pub labels: Option<Vec<CardLabel>>,
    /// Replace all assignees
    pub assignees: Option<Vec<UserRef>>,
    /// New attachment count
    pub attachment_count: Option<u32>,
    /// New comment count
    pub comment_count: Option<u32>,
}

impl UpdateCard {
    /// Create a new UpdateCard command with no fields to merge
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Set or clear the priority
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Set the archived flag
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set or clear the start date
    pub fn with_start_date(mut self, start_date: Option<DateTime<Utc>>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Replace the label snapshots
    pub fn with_labels(mut self, labels: Vec<CardLabel>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Replace the assignees
    pub fn with_assignees(mut self, assignees: Vec<UserRef>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    /// Set the attachment count
    pub fn with_attachment_count(mut self, count: u32) -> Self {
        self.attachment_count = Some(count);
        self
    }

    /// Set the comment count
    pub fn with_comment_count(mut self, count: u32) -> Self {
        self.comment_count = Some(count);
        self
    }
}

impl Apply for UpdateCard {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        let Some(board) = store.board_mut() else {
            return Outcome::Ignored;
        };
        let Some(card) = board
            .columns
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|card| card.id == self.id)
        else {
            tracing::debug!("update card ignored, card not found: {}", self.id);
            return Outcome::Ignored;
        };

        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(completed) = self.completed {
            card.completed = completed;
        }
        if let Some(archived) = self.archived {
            card.archived = archived;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(start_date) = self.start_date {
            card.start_date = start_date;
        }
        if let Some(labels) = &self.labels {
            card.labels = labels.clone();
        }
        if let Some(assignees) = &self.assignees {
            card.assignees = assignees.clone();
        }
        if let Some(count) = self.attachment_count {
            card.attachment_count = count;
        }
        if let Some(count) = self.comment_count {
            card.comment_count = count;
        }

        store.refresh_filter();
        tracing::debug!("Card updated: {}", self.id);
        Outcome::Applied
    }
}
