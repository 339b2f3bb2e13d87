//! In-memory board state container for the Boardly kanban client
//!
//! This crate owns the client-side state for a single board detail view: the
//! board snapshot (columns, cards, members, labels), a derived search filter,
//! and transient selection/drag state. Mutations are applied optimistically -
//! locally and synchronously, before the backend confirms - and the calling
//! layer mirrors them to the server.
//!
//! ## Overview
//!
//! - **One store = one board** - a [`BoardStore`] is created when a board
//!   detail view loads and reset when it unmounts
//! - **Snapshot semantics** - the board lives behind an `Arc`; readers clone
//!   the handle cheaply and keep a consistent view across later mutations
//! - **Commands as values** - every mutation is a command struct with an
//!   idempotent apply; failed server mirrors can be handed to a
//!   [`ReconcilePolicy`]
//! - **Total operations** - nothing here panics or returns `Err` on a missing
//!   id; not-found degrades to a silent no-op ([`Outcome::Ignored`])
//!
//! ## Basic Usage
//!
//! ```rust
//! use boardly_board::{BoardStore, Board, Column, Card};
//!
//! let mut store = BoardStore::new();
//!
//! // A snapshot arrives from the backend
//! let todo = Column::new("Todo", 0);
//! let todo_id = todo.id.clone();
//! let board = Board::new("Roadmap").with_columns(vec![todo]);
//! store.set_board(Some(board));
//!
//! // Optimistic local mutation; the caller mirrors it to the server
//! store.add_card(todo_id, Card::new("Ship the beta"));
//!
//! // Derived search
//! store.set_search_term("beta");
//! assert_eq!(store.filtered_cards().len(), 1);
//! ```

mod dashboard;
mod error;
mod mutation;
mod search;
mod selection;
mod store;
pub mod types;

// Command modules
pub mod card;
pub mod column;
pub mod label;
pub mod member;

pub use dashboard::{
    Activity, BoardSummary, DashboardStats, DashboardStore, UpdateBoardSummary, ViewMode,
};
pub use error::{BoardError, Result};
pub use mutation::{Apply, Mutation, Outcome, ReconcilePolicy, Recovery, RefetchOnFailure};
pub use search::matching_cards;
pub use selection::{DropTarget, Selection};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, CardLabel, Column, ColumnId, Label, LabelId, Member, MemberRole,
    Priority, UserId, UserRef,
};
