//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::card::{Card, Catalog, Category};
use crate::core::navigation::NavigationController;
use crate::core::state::App;

/// A card whose fields are all derived from `latin`.
pub fn card(latin: &str) -> Card {
    Card::new(latin, latin.to_lowercase(), format!("{latin} meaning"))
}

/// `{ beginner: [[A, B, C]] }`
pub fn abc_catalog() -> Catalog {
    Catalog::new(vec![Category::from_subsets(
        "beginner",
        vec![vec![card("A"), card("B"), card("C")]],
    )])
}

/// `verbs` has two sets, `nouns` has one.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Category::from_subsets(
            "verbs",
            vec![
                vec![card("amo"), card("video"), card("venio")],
                vec![card("duco"), card("capio")],
            ],
        ),
        Category::from_subsets(
            "nouns",
            vec![vec![
                card("aqua"),
                card("terra"),
                card("puella"),
                card("puer"),
                card("via"),
                card("rosa"),
            ]],
        ),
    ])
}

/// Creates a test App over the sample catalog with a fixed seed.
pub fn test_app() -> App {
    App::new(NavigationController::with_seed(sample_catalog(), 11))
}
