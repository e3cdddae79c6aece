//! Local Search Filter
//!
//! Visibility over already-rendered cards. Never touches the backend.

use crate::card::CardView;

/// Whether `card` stays visible for `term`.
///
/// Case-insensitive substring match against the title and the first
/// paragraph (location line). An empty term matches everything.
pub fn matches(card: &CardView, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    card.title.to_lowercase().contains(&term) || card.location_line.to_lowercase().contains(&term)
}

pub fn visible_count(cards: &[CardView], term: &str) -> usize {
    cards.iter().filter(|card| matches(card, term)).count()
}
