//! Card types: Card, CardLabel, UserRef, Priority

use super::ids::{CardId, LabelId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card on the board.
///
/// A card belongs to exactly one column at a time; membership is represented
/// purely by containment in that column's card list, there is no back-pointer.
/// `position` mirrors the card's index within its column and is kept dense
/// by the move/delete mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(alias = "cardId")]
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, alias = "isCompleted")]
    pub completed: bool,
    #[serde(default, alias = "isArchived")]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Label snapshots copied from the board's labels (not live links)
    #[serde(default)]
    pub labels: Vec<CardLabel>,
    #[serde(default)]
    pub assignees: Vec<UserRef>,
    #[serde(default)]
    pub attachment_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_comment_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<UserRef>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Create a new card with a fresh id and the given title
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            position: 0,
            priority: None,
            completed: false,
            archived: false,
            due_date: None,
            start_date: None,
            labels: Vec::new(),
            assignees: Vec::new(),
            attachment_count: 0,
            comment_count: 0,
            last_comment_at: None,
            created_by: None,
            completed_by: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the position within the column
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Set the label snapshots
    pub fn with_labels(mut self, labels: Vec<CardLabel>) -> Self {
        self.labels = labels;
        self
    }

    /// Set the assignees
    pub fn with_assignees(mut self, assignees: Vec<UserRef>) -> Self {
        self.assignees = assignees;
        self
    }

    /// Set the creator snapshot
    pub fn with_created_by(mut self, user: UserRef) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// Label value snapshot carried on a card.
///
/// Copies id/name/color from the board label at attach time; board-level
/// label edits do not flow through to existing card snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLabel {
    pub id: LabelId,
    pub name: String,
    /// Hex color string, e.g. "#FF5630"
    pub color: String,
}

impl CardLabel {
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// User snapshot (id + display name) used for assignees, creators and completers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: UserId,
    pub name: String,
}

impl UserRef {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// Card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        };
        f.write_str(s)
    }
}
