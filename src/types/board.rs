//! Board-level types: Board, Column, Member, MemberRole, Label

use super::card::Card;
use super::ids::{BoardId, CardId, ColumnId, LabelId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full board snapshot: metadata plus ordered columns, members and labels.
///
/// Snapshots are replaced wholesale when a board detail view loads and
/// discarded on navigation away; the store never merges two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(alias = "boardId")]
    pub id: BoardId,
    #[serde(alias = "boardName")]
    pub name: String,
    #[serde(default, alias = "boardDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "isStarred")]
    pub starred: bool,
    #[serde(default, alias = "boardColor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, alias = "boardMembers")]
    pub members: Vec<Member>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new empty board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            name: name.into(),
            description: None,
            starred: false,
            color: None,
            columns: Vec::new(),
            members: Vec::new(),
            labels: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the columns
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the members
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// Set the labels
    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Find a card by id across all columns (linear scan, column order)
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| &card.id == id)
    }

    /// Find the column containing the given card
    pub fn column_of_card(&self, id: &CardId) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.cards.iter().any(|card| &card.id == id))
    }

    /// Find a member by user id
    pub fn find_member(&self, user_id: &UserId) -> Option<&Member> {
        self.members.iter().find(|m| &m.user_id == user_id)
    }

    /// Find a label by id
    pub fn find_label(&self, id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| &l.id == id)
    }
}

/// A column (list) on the board.
///
/// `position` defines left-to-right order and is kept dense 0..N-1 by the
/// column mutations. The card vec order is the authoritative display order;
/// `card_count` is a cached copy of `cards.len()` maintained by every
/// mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(alias = "columnId")]
    pub id: ColumnId,
    #[serde(alias = "columnName")]
    pub name: String,
    #[serde(default, alias = "columnColor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub position: usize,
    #[serde(default)]
    pub card_count: usize,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create a new empty column
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            id: ColumnId::new(),
            name: name.into(),
            color: None,
            position,
            card_count: 0,
            cards: Vec::new(),
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the cards, syncing `card_count`
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.card_count = cards.len();
        self.cards = cards;
        self
    }

    /// Renumber card positions to match array order (dense 0..N-1)
    pub(crate) fn renumber_cards(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.position = index;
        }
    }
}

/// A board member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default = "Utc::now")]
    pub joined_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub last_active_at: DateTime<Utc>,
    #[serde(default = "default_true", alias = "isActive")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Member {
    /// Create a new active member with role-derived permissions
    pub fn new(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: MemberRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            role,
            permissions: role.permissions(),
            joined_at: now,
            last_active_at: now,
            active: true,
        }
    }
}

/// A member's role on the board, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Viewer,
    Editor,
    Admin,
    Owner,
}

impl MemberRole {
    pub fn can_read(&self) -> bool {
        true
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Self::Editor | Self::Admin | Self::Owner)
    }

    pub fn can_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::Owner)
    }

    pub fn can_own(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Permission strings as presented to the UI layer
    pub fn permissions(&self) -> Vec<String> {
        let mut perms = vec!["read".to_string()];
        if self.can_write() {
            perms.push("write".to_string());
        }
        if self.can_admin() {
            perms.push("admin".to_string());
        }
        if self.can_own() {
            perms.push("own".to_string());
        }
        perms
    }
}

/// A board label. Cards reference labels by value snapshot, not by live link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    /// Hex color string, e.g. "#36B37E"
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Label {
    /// Create a new label with a fresh id
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: LabelId::new(),
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
