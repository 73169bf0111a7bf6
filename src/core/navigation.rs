//! # Navigation
//!
//! Tracks which category, which deck, which card and which screen is showing.
//! `NavigationController` is the only thing that mutates `NavigationState`;
//! renderers read a snapshot through [`NavigationController::current_state`].
//!
//! ```text
//!  Home ──► CategoryMenu ──► Flashcard ◄──► ListView
//!   ▲            ▲               │              │
//!   │            └──── back ─────┴──────────────┤
//!   └───────────────── home ────────────────────┘
//! ```
//!
//! Every fallible command validates before it touches anything, so an `Err`
//! always leaves the state exactly as it was.

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::card::{Card, Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    CategoryMenu,
    Flashcard,
    ListView,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::CategoryMenu => "Category",
            Screen::Flashcard => "Flashcards",
            Screen::ListView => "Word List",
        }
    }
}

/// What is currently on screen.
///
/// `active_index` is always inside `active_deck` when the deck is non-empty
/// and parked at 0 otherwise. `Flashcard` and `ListView` are only ever active
/// with a non-empty deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_category: Option<String>,
    pub active_subset: Option<usize>,
    pub active_deck: Vec<Card>,
    pub active_index: usize,
    pub active_screen: Screen,
    /// Back of the card is showing. Only meaningful on `Screen::Flashcard`.
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownCategory(String),
    SubsetIndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    NoActiveCard,
    NoActiveCategory,
    EmptyDeck {
        category: String,
        index: usize,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownCategory(name) => write!(f, "no deck found for: {name}"),
            NavError::SubsetIndexOutOfRange {
                category,
                index,
                len,
            } => write!(
                f,
                "set {index} out of range for '{category}' ({len} available)"
            ),
            NavError::IndexOutOfRange { index, len } => {
                write!(f, "card {index} out of range (deck has {len})")
            }
            NavError::NoActiveCard => write!(f, "no active card"),
            NavError::NoActiveCategory => write!(f, "no active category"),
            NavError::EmptyDeck { category, index } => {
                write!(f, "set {index} of '{category}' has no cards")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// In-place Fisher–Yates: every permutation is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

pub struct NavigationController {
    catalog: Catalog,
    state: NavigationState,
    rng: StdRng,
}

impl NavigationController {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Controller whose shuffles are reproducible for a given seed.
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            state: NavigationState::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_card(&self) -> Result<&Card, NavError> {
        self.state
            .active_deck
            .get(self.state.active_index)
            .ok_or(NavError::NoActiveCard)
    }

    /// One-based position and deck length, for "3 / 10" labels.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let len = self.state.active_deck.len();
        (len > 0).then(|| (self.state.active_index + 1, len))
    }

    pub fn select_category(&mut self, category: &str) -> Result<(), NavError> {
        if self.catalog.category(category).is_none() {
            return Err(NavError::UnknownCategory(category.to_string()));
        }
        // The working deck always belongs to the active category
        if self.state.active_category.as_deref() != Some(category) {
            self.state.active_category = Some(category.to_string());
            self.state.active_subset = None;
            self.state.active_deck.clear();
            self.state.active_index = 0;
            self.state.revealed = false;
        }
        self.state.active_screen = Screen::CategoryMenu;
        Ok(())
    }

    pub fn select_deck(&mut self, category: &str, subset: usize) -> Result<(), NavError> {
        let found = self
            .catalog
            .category(category)
            .ok_or_else(|| NavError::UnknownCategory(category.to_string()))?;
        let deck = found
            .subsets
            .get(subset)
            .ok_or_else(|| NavError::SubsetIndexOutOfRange {
                category: category.to_string(),
                index: subset,
                len: found.subsets.len(),
            })?;
        if deck.is_empty() {
            return Err(NavError::EmptyDeck {
                category: category.to_string(),
                index: subset,
            });
        }

        // The catalog stays pristine; shuffles only touch this copy.
        self.state.active_deck = deck.cards.clone();
        self.state.active_category = Some(category.to_string());
        self.state.active_subset = Some(subset);
        self.state.active_index = 0;
        self.state.revealed = false;
        self.state.active_screen = Screen::Flashcard;
        Ok(())
    }

    pub fn next(&mut self) {
        let len = self.state.active_deck.len();
        if len == 0 {
            return;
        }
        self.state.active_index = (self.state.active_index + 1) % len;
        self.state.revealed = false;
    }

    pub fn previous(&mut self) {
        let len = self.state.active_deck.len();
        if len == 0 {
            return;
        }
        self.state.active_index = (self.state.active_index + len - 1) % len;
        self.state.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        if self.state.active_screen == Screen::Flashcard {
            self.state.revealed = !self.state.revealed;
        }
    }

    pub fn shuffle(&mut self) {
        if self.state.active_deck.is_empty() {
            return;
        }
        fisher_yates(&mut self.state.active_deck, &mut self.rng);
        self.state.active_index = 0;
        self.state.revealed = false;
        debug!("Shuffled {} cards", self.state.active_deck.len());
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), NavError> {
        let len = self.state.active_deck.len();
        if index >= len {
            return Err(NavError::IndexOutOfRange { index, len });
        }
        self.state.active_index = index;
        self.state.revealed = false;
        self.state.active_screen = Screen::Flashcard;
        Ok(())
    }

    /// Switch screens without touching the deck or position.
    pub fn show_screen(&mut self, screen: Screen) -> Result<(), NavError> {
        match screen {
            Screen::Flashcard | Screen::ListView if self.state.active_deck.is_empty() => {
                return Err(NavError::NoActiveCard);
            }
            Screen::CategoryMenu if self.state.active_category.is_none() => {
                return Err(NavError::NoActiveCategory);
            }
            _ => {}
        }
        self.state.active_screen = screen;
        Ok(())
    }
}
