//! # Catalog Loading
//!
//! Builds a [`Catalog`] from a JSON words file. Each top-level key is a
//! category; its value is either a flat list of cards or a list of subsets:
//!
//! ```text
//! { "beginner": [ {card}, {card} ] }                 // one subset
//! { "beginner": [ [ {card}, {card} ], [ {card} ] ] } // two subsets
//! ```
//!
//! Category order follows the file. Card fields are not validated.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::card::{Card, Catalog, Category};

/// Word list compiled into the binary, used when no words file is configured.
const BUILTIN_WORDS: &str = include_str!("../../assets/words.json");

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A value that is neither a card list nor a list of card lists.
    Shape { category: String, message: String },
    /// Nothing left to study after dropping empty decks.
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "words file I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "words file parse error: {e}"),
            CatalogError::Shape { category, message } => {
                write!(f, "category '{category}' has an unexpected shape: {message}")
            }
            CatalogError::Empty => write!(f, "words file contains no cards"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategorySource {
    Subsets(Vec<Vec<Card>>),
    Flat(Vec<Card>),
}

impl CategorySource {
    fn into_subsets(self) -> Vec<Vec<Card>> {
        match self {
            CategorySource::Subsets(subsets) => subsets,
            CategorySource::Flat(cards) => vec![cards],
        }
    }
}

/// Load the catalog from a JSON words file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    info!("Loading words from {}", path.display());
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    parse_catalog(&contents)
}

/// The catalog bundled with the binary.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    debug!("Using built-in word list");
    parse_catalog(BUILTIN_WORDS)
}

/// Parse catalog JSON. Empty subsets and categories are dropped.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let root: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).map_err(CatalogError::Parse)?;

    let mut categories = Vec::with_capacity(root.len());
    for (name, value) in root {
        let source: CategorySource =
            serde_json::from_value(value).map_err(|e| CatalogError::Shape {
                category: name.clone(),
                message: e.to_string(),
            })?;

        let mut subsets = source.into_subsets();
        let before = subsets.len();
        subsets.retain(|cards| !cards.is_empty());
        if subsets.len() < before {
            warn!(
                "Dropped {} empty deck(s) from category '{}'",
                before - subsets.len(),
                name
            );
        }
        if subsets.is_empty() {
            warn!("Category '{}' has no cards, skipping", name);
            continue;
        }

        categories.push(Category::from_subsets(name, subsets));
    }

    if categories.is_empty() {
        return Err(CatalogError::Empty);
    }

    let catalog = Catalog::new(categories);
    info!("Decks loaded: {:?}", catalog.names());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FLAT: &str = r#"{
        "beginner": [
            {"latin": "aqua", "pron": "AH-kwah", "english": "water"},
            {"latin": "terra", "pron": "TEH-rah", "english": "earth"}
        ]
    }"#;

    #[test]
    fn test_flat_category_becomes_single_subset() {
        let catalog = parse_catalog(FLAT).unwrap();
        let beginner = catalog.category("beginner").unwrap();
        assert_eq!(beginner.subsets.len(), 1);
        assert_eq!(beginner.subsets[0].cards[1].latin, "terra");
    }

    #[test]
    fn test_nested_category_keeps_subsets() {
        let json = r#"{
            "verbs": [
                [{"latin": "amo", "pron": "AH-moh", "english": "I love"}],
                [{"latin": "video", "pron": "WEE-deh-oh", "english": "I see"},
                 {"latin": "venio", "pron": "WEH-nee-oh", "english": "I come"}]
            ]
        }"#;
        let catalog = parse_catalog(json).unwrap();
        let verbs = catalog.category("verbs").unwrap();
        assert_eq!(verbs.subsets.len(), 2);
        assert_eq!(verbs.subsets[1].len(), 2);
        assert_eq!(verbs.subsets[1].label, "Set 2");
    }

    #[test]
    fn test_category_order_follows_file() {
        let json = r#"{
            "zeta": [{"latin": "z", "pron": "z", "english": "z"}],
            "alpha": [{"latin": "a", "pron": "a", "english": "a"}],
            "mid": [{"latin": "m", "pron": "m", "english": "m"}]
        }"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_subsets_and_categories_are_dropped() {
        let json = r#"{
            "hollow": [],
            "partial": [[], [{"latin": "x", "pron": "x", "english": "x"}]]
        }"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.names(), vec!["partial"]);
        assert_eq!(catalog.category("partial").unwrap().subsets.len(), 1);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(parse_catalog("{}"), Err(CatalogError::Empty)));
        assert!(matches!(
            parse_catalog(r#"{"a": [], "b": [[]]}"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_wrong_shape_names_category() {
        let err = parse_catalog(r#"{"broken": "not a list"}"#).unwrap_err();
        match err {
            CatalogError::Shape { category, .. } => assert_eq!(category, "broken"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            parse_catalog("[1, 2"),
            Err(CatalogError::Parse(_))
        ));
        // Top level must be an object
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FLAT.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = builtin_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.categories().iter().all(|c| c.card_count() > 0));
    }
}
