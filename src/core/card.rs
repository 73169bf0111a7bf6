//! # Vocabulary Data
//!
//! The read-only data the navigator walks over.
//!
//! ```text
//! Catalog
//! └── Category ("beginner")
//!     ├── Deck ("Set 1")
//!     │   ├── Card { latin, pronunciation, english }
//!     │   └── ...
//!     └── Deck ("Set 2")
//! ```
//!
//! A card has no id. Its identity is its position inside the deck.

use serde::{Deserialize, Serialize};

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub latin: String,
    #[serde(rename = "pron", alias = "pronunciation")]
    pub pronunciation: String,
    pub english: String,
}

impl Card {
    pub fn new(
        latin: impl Into<String>,
        pronunciation: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            latin: latin.into(),
            pronunciation: pronunciation.into(),
            english: english.into(),
        }
    }
}

/// An ordered run of cards. Order drives next/previous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub label: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            label: label.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A named group of decks ("subsets").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub subsets: Vec<Deck>,
}

impl Category {
    /// Build a category, labelling subsets "Set 1", "Set 2", ... in order.
    pub fn from_subsets(name: impl Into<String>, subsets: Vec<Vec<Card>>) -> Self {
        let subsets = subsets
            .into_iter()
            .enumerate()
            .map(|(i, cards)| Deck::new(subset_label(i), cards))
            .collect();
        Self {
            name: name.into(),
            subsets,
        }
    }

    pub fn card_count(&self) -> usize {
        self.subsets.iter().map(Deck::len).sum()
    }
}

/// Display label for a zero-based subset index.
pub fn subset_label(index: usize) -> String {
    format!("Set {}", index + 1)
}

/// Every category, in source order. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_reads_short_pron_field() {
        let card: Card =
            serde_json::from_str(r#"{"latin":"aqua","pron":"AH-kwah","english":"water"}"#)
                .unwrap();
        assert_eq!(card, Card::new("aqua", "AH-kwah", "water"));
    }

    #[test]
    fn test_card_accepts_long_pronunciation_field() {
        let card: Card = serde_json::from_str(
            r#"{"latin":"rosa","pronunciation":"ROH-sah","english":"rose"}"#,
        )
        .unwrap();
        assert_eq!(card.pronunciation, "ROH-sah");
    }

    #[test]
    fn test_category_labels_subsets_in_order() {
        let category = Category::from_subsets(
            "beginner",
            vec![
                vec![Card::new("a", "a", "a")],
                vec![Card::new("b", "b", "b"), Card::new("c", "c", "c")],
            ],
        );
        assert_eq!(category.subsets[0].label, "Set 1");
        assert_eq!(category.subsets[1].label, "Set 2");
        assert_eq!(category.card_count(), 3);
    }

    #[test]
    fn test_catalog_lookup_by_name() {
        let catalog = Catalog::new(vec![
            Category::from_subsets("beginner", vec![]),
            Category::from_subsets("advanced", vec![]),
        ]);
        assert!(catalog.category("advanced").is_some());
        assert!(catalog.category("missing").is_none());
        assert_eq!(catalog.names(), vec!["beginner", "advanced"]);
    }
}
