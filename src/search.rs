//! Search/filter engine: derive a flat card list matching a search term.
//!
//! The inactive-filter convention is inverted on purpose: a blank term yields
//! an *empty* result, not "all cards". UI code distinguishes "filter
//! inactive" from "zero matches" by inspecting the stored term itself, so
//! `search_term` and `filtered_cards` must always be read as a pair.

use crate::types::{Board, Card};

/// Collect cards whose title or description contains `term`,
/// case-insensitively. Cards without a description match on title only.
/// Result order is column order, then card array order within each column.
///
/// A blank (empty or whitespace) term returns an empty list.
pub fn matching_cards(board: &Board, term: &str) -> Vec<Card> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    board
        .columns
        .iter()
        .flat_map(|column| column.cards.iter())
        .filter(|card| card_matches(card, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased.
fn card_matches(card: &Card, needle: &str) -> bool {
    if card.title.to_lowercase().contains(needle) {
        return true;
    }
    card.description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(needle))
}
