//! Item Categories
//!
//! Cosmetic category tag inferred from an item's description.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Keys,
    Electronics,
    Bags,
    Bottles,
    Wallets,
    #[default]
    Item,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keys => "Keys",
            Category::Electronics => "Electronics",
            Category::Bags => "Bags",
            Category::Bottles => "Bottles",
            Category::Wallets => "Wallets",
            Category::Item => "Item",
        }
    }
}

/// Keyword table, checked in order; first hit wins
const KEYWORDS: &[(&[&str], Category)] = &[
    (&["key"], Category::Keys),
    (&["phone", "mobile"], Category::Electronics),
    (&["bag", "backpack"], Category::Bags),
    (&["bottle", "cup"], Category::Bottles),
    (&["wallet", "card"], Category::Wallets),
];

/// Infer a category by case-insensitive keyword match
pub fn extract_category(description: &str) -> Category {
    let lower = description.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}
