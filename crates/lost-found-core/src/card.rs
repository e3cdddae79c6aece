//! Card Projection
//!
//! Pure function from store to what the grid should show. Derived fields
//! (category, time-ago) are computed here at the render boundary and never
//! written back to the store.

use chrono::{DateTime, Utc};

use crate::category::{extract_category, Category};
use crate::config::ClientConfig;
use crate::format::{time_ago, truncate};
use crate::models::{ItemId, ItemRecord};
use crate::store::{ItemStore, LoadState};

pub const TITLE_MAX_CHARS: usize = 30;
pub const SUGGESTION_MAX_CHARS: usize = 50;

pub const LOADING_MESSAGE: &str = "Loading items...";
pub const EMPTY_MESSAGE: &str = "No items reported yet.";
pub const NO_MATCHES_MESSAGE: &str = "No items match your search.";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load items. Please try again later.";
pub const VALIDATION_MESSAGE: &str = "Please enter a description and a location.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete item. Please try again.";
pub const DELETE_CONFIRM_MESSAGE: &str = "Delete this item?";
/// Time badge for items without a readable timestamp
pub const UNKNOWN_TIME_LABEL: &str = "Unknown time";

/// Display-ready card for one item
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ItemId,
    pub image_url: String,
    /// Untruncated description, for alt text and tooltips
    pub full_title: String,
    pub title: String,
    /// First paragraph of the card
    pub location_line: String,
    pub detail: Option<String>,
    pub ai_suggestion: String,
    pub category: Category,
    pub time_ago: String,
    /// Deleted, fading out
    pub removing: bool,
}

impl CardView {
    pub fn from_record(item: &ItemRecord, config: &ClientConfig, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id.clone(),
            image_url: config.image_url(item.image.as_deref()),
            full_title: item.description.clone(),
            title: truncate(&item.description, TITLE_MAX_CHARS),
            location_line: format!("Found at: {}", item.location),
            detail: item.detail().map(str::to_string),
            ai_suggestion: truncate(&item.ai_suggestion, SUGGESTION_MAX_CHARS),
            category: extract_category(&item.description),
            time_ago: item
                .timestamp
                .map_or_else(|| UNKNOWN_TIME_LABEL.to_string(), |t| time_ago(t, now)),
            removing: false,
        }
    }
}

/// What the grid container shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading,
    Error(&'static str),
    Empty,
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Placeholder or error text, when the grid shows a message instead of cards
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridView::Loading => Some(LOADING_MESSAGE),
            GridView::Error(msg) => Some(*msg),
            GridView::Empty => Some(EMPTY_MESSAGE),
            GridView::Cards(_) => None,
        }
    }
}

/// Project the store into a grid view, in backend order
pub fn project(store: &ItemStore, config: &ClientConfig, now: DateTime<Utc>) -> GridView {
    match store.state() {
        LoadState::Pending => GridView::Loading,
        LoadState::Failed(_) => GridView::Error(LOAD_ERROR_MESSAGE),
        LoadState::Loaded if store.items().is_empty() => GridView::Empty,
        LoadState::Loaded => GridView::Cards(
            store
                .items()
                .iter()
                .map(|item| CardView {
                    removing: store.is_removing(&item.id),
                    ..CardView::from_record(item, config, now)
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn make_item(id: &str, description: &str) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            description: description.to_string(),
            location: "Cafeteria".to_string(),
            item_description: None,
            image: None,
            timestamp: Some(now() - Duration::hours(3)),
            ai_suggestion: "Looks like a standard issue item from the campus store".to_string(),
        }
    }

    fn loaded(items: Vec<ItemRecord>) -> ItemStore {
        let mut store = ItemStore::new();
        let t = store.begin_fetch();
        store.apply_fetch(t, Ok(items));
        store
    }

    #[test]
    fn test_pending_and_failed() {
        let config = ClientConfig::default();
        assert_eq!(project(&ItemStore::new(), &config, now()), GridView::Loading);

        let mut store = ItemStore::new();
        let t = store.begin_fetch();
        store.apply_fetch(t, Err("HTTP 500".to_string()));
        let view = project(&store, &config, now());
        assert_eq!(view, GridView::Error(LOAD_ERROR_MESSAGE));
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let view = project(&loaded(vec![]), &ClientConfig::default(), now());
        assert_eq!(view, GridView::Empty);
        assert_eq!(view.message(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_card_fields() {
        let mut item = make_item("9", "A very long description of a black leather wallet");
        item.image = Some("wallet.png".to_string());
        item.item_description = Some("Has a student ID inside".to_string());
        let config = ClientConfig::default();
        let card = CardView::from_record(&item, &config, now());

        assert_eq!(card.title, "A very long description of a b...");
        assert_eq!(card.full_title, item.description);
        assert_eq!(card.location_line, "Found at: Cafeteria");
        assert_eq!(card.detail.as_deref(), Some("Has a student ID inside"));
        assert_eq!(card.ai_suggestion.chars().count(), SUGGESTION_MAX_CHARS + 3);
        assert!(card.ai_suggestion.ends_with("..."));
        assert_eq!(card.category, Category::Wallets);
        assert_eq!(card.time_ago, "3h ago");
        assert_eq!(card.image_url, "http://127.0.0.1:5000/uploads/wallet.png");
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let config = ClientConfig::default();
        let card = CardView::from_record(&make_item("1", "Umbrella"), &config, now());
        assert_eq!(card.image_url, config.placeholder_image);
        assert_eq!(card.detail, None);
    }

    #[test]
    fn test_missing_timestamp_and_location() {
        let mut item = make_item("4", "Scarf");
        item.timestamp = None;
        item.location = String::new();
        let card = CardView::from_record(&item, &ClientConfig::default(), now());
        assert_eq!(card.time_ago, UNKNOWN_TIME_LABEL);
        assert_eq!(card.location_line, "Found at: ");
    }

    #[test]
    fn test_backend_order_and_removing_flag() {
        let mut store = loaded(vec![make_item("b", "Bag"), make_item("a", "Keys")]);
        store.mark_removing(&ItemId::new("a"));
        let view = project(&store, &ClientConfig::default(), now());
        let ids: Vec<_> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(!view.cards()[0].removing);
        assert!(view.cards()[1].removing);
    }
}
