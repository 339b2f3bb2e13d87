//! Core types for the board state container

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, Column, Label, Member, MemberRole};
pub use card::{Card, CardLabel, Priority, UserRef};
pub use ids::{BoardId, CardId, ColumnId, LabelId, UserId};
