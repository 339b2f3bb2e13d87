//! DashboardStore - in-memory state for the boards-overview page.
//!
//! Holds the user's board summaries, aggregate statistics and recent
//! activity, each with its own loading/error flag pair so the three backend
//! fetches can fail independently. Like [`crate::store::BoardStore`] it is
//! constructed explicitly and applies mutations optimistically.
//!
//! Note the filter convention differs from the board store on purpose: a
//! blank dashboard query means "show all boards", not "show none".

use crate::types::{BoardId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board as listed on the dashboard (no columns or cards)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    #[serde(alias = "boardId")]
    pub id: BoardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "isStarred")]
    pub starred: bool,
    #[serde(default, alias = "isArchived")]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BoardSummary {
    /// Create a new summary with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            title: title.into(),
            description: None,
            starred: false,
            archived: false,
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the starred flag
    pub fn with_starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    /// Set the archived flag
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }
}

/// Partial fields to merge into a [`BoardSummary`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardSummary {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub starred: Option<bool>,
    pub archived: Option<bool>,
    pub color: Option<Option<String>>,
}

impl UpdateBoardSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }
}

/// Aggregate dashboard statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_boards: u32,
    pub total_cards: u32,
    pub starred_boards: u32,
    pub archived_boards: u32,
}

/// A recent activity entry shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(alias = "activityId")]
    pub id: String,
    /// Activity kind, e.g. "card_created"
    #[serde(alias = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_user: Option<UserRef>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Dashboard board-grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// How many activity entries the dashboard shows
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// In-memory state container for the dashboard view.
#[derive(Debug, Default)]
pub struct DashboardStore {
    boards: Vec<BoardSummary>,
    loading_boards: bool,
    boards_error: Option<String>,

    stats: DashboardStats,
    loading_stats: bool,
    stats_error: Option<String>,

    activities: Vec<Activity>,
    loading_activities: bool,
    activities_error: Option<String>,

    search_query: String,
    view_mode: ViewMode,
}

impl DashboardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn boards(&self) -> &[BoardSummary] {
        &self.boards
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Boards whose title or description contains the query,
    /// case-insensitively. A blank query matches every board.
    pub fn filtered_boards(&self) -> Vec<&BoardSummary> {
        let needle = self.search_query.to_lowercase();
        self.boards
            .iter()
            .filter(|board| {
                board.title.to_lowercase().contains(&needle)
                    || board
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn starred_boards(&self) -> Vec<&BoardSummary> {
        self.boards.iter().filter(|b| b.starred).collect()
    }

    pub fn archived_boards(&self) -> Vec<&BoardSummary> {
        self.boards.iter().filter(|b| b.archived).collect()
    }

    /// The newest activity entries, capped at the dashboard display limit
    pub fn recent_activities(&self) -> &[Activity] {
        let end = self.activities.len().min(RECENT_ACTIVITY_LIMIT);
        &self.activities[..end]
    }

    /// True while any of the three data sets is loading
    pub fn is_loading(&self) -> bool {
        self.loading_boards || self.loading_stats || self.loading_activities
    }

    /// True when any of the three data sets has a stored error
    pub fn has_error(&self) -> bool {
        self.boards_error.is_some() || self.stats_error.is_some() || self.activities_error.is_some()
    }

    pub fn boards_error(&self) -> Option<&str> {
        self.boards_error.as_deref()
    }

    pub fn stats_error(&self) -> Option<&str> {
        self.stats_error.as_deref()
    }

    pub fn activities_error(&self) -> Option<&str> {
        self.activities_error.as_deref()
    }

    // =========================================================================
    // Data-set setters
    // =========================================================================

    pub fn set_boards(&mut self, boards: Vec<BoardSummary>) {
        tracing::debug!("Dashboard boards set: {}", boards.len());
        self.boards = boards;
    }

    pub fn set_loading_boards(&mut self, loading: bool) {
        self.loading_boards = loading;
    }

    pub fn set_boards_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            tracing::warn!("Dashboard boards error: {}", message);
        }
        self.boards_error = error;
    }

    pub fn set_stats(&mut self, stats: DashboardStats) {
        self.stats = stats;
    }

    pub fn set_loading_stats(&mut self, loading: bool) {
        self.loading_stats = loading;
    }

    pub fn set_stats_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            tracing::warn!("Dashboard stats error: {}", message);
        }
        self.stats_error = error;
    }

    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.activities = activities;
    }

    pub fn set_loading_activities(&mut self, loading: bool) {
        self.loading_activities = loading;
    }

    pub fn set_activities_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            tracing::warn!("Dashboard activities error: {}", message);
        }
        self.activities_error = error;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // =========================================================================
    // Board-list mutations (optimistic)
    // =========================================================================

    /// Prepend a newly created board so it shows first on the dashboard
    pub fn add_board(&mut self, board: BoardSummary) {
        tracing::debug!("Dashboard board added: {}", board.id);
        self.boards.insert(0, board);
    }

    /// Merge partial fields into a board summary; missing id is a no-op
    pub fn update_board(&mut self, board_id: &BoardId, updates: UpdateBoardSummary) {
        let Some(board) = self.boards.iter_mut().find(|b| &b.id == board_id) else {
            tracing::debug!("dashboard update ignored, board not found: {}", board_id);
            return;
        };

        if let Some(title) = updates.title {
            board.title = title;
        }
        if let Some(description) = updates.description {
            board.description = description;
        }
        if let Some(starred) = updates.starred {
            board.starred = starred;
        }
        if let Some(archived) = updates.archived {
            board.archived = archived;
        }
        if let Some(color) = updates.color {
            board.color = color;
        }
        tracing::debug!("Dashboard board updated: {}", board_id);
    }

    /// Remove a board summary by id; missing id is a no-op
    pub fn remove_board(&mut self, board_id: &BoardId) {
        self.boards.retain(|b| &b.id != board_id);
        tracing::debug!("Dashboard board removed: {}", board_id);
    }

    /// Restore all state to initial empty values
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Dashboard store reset");
    }
}
