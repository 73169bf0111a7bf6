//! # Actions
//!
//! Everything that can happen in flashdeck becomes an `Action`.
//! User presses the right arrow? That's `Action::NextCard`.
//! User clicks a row in the word list? That's `Action::JumpTo(row)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and returns an `Effect` for the adapter to carry out.
//! No I/O here apart from logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! A rejected action is logged and echoed in the status line. The
//! navigation state is left exactly as it was.

use log::{error, info};

use crate::core::card::subset_label;
use crate::core::navigation::{NavError, Screen};
use crate::core::state::App;

pub const SHUFFLED_TOAST: &str = "Shuffled successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoHome,
    /// Open a category. Single-set categories go straight to the cards.
    OpenCategory(String),
    OpenDeck { category: String, subset: usize },
    NextCard,
    PreviousCard,
    ToggleReveal,
    Shuffle,
    ShowList,
    BackToCards,
    /// Return to the set menu of the active category.
    BackToCategory,
    JumpTo(usize),
    Quit,
}

/// Side effects the adapter performs after `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Toast(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match apply(app, action) {
        Ok(effect) => effect,
        Err(e) => {
            error!("{}", e);
            app.status_message = capitalize(&e.to_string());
            Effect::None
        }
    }
}

fn apply(app: &mut App, action: Action) -> Result<Effect, NavError> {
    match action {
        Action::GoHome => {
            app.nav.show_screen(Screen::Home)?;
            app.status_message = crate::core::state::WELCOME_MESSAGE.to_string();
        }
        Action::OpenCategory(name) => {
            let subsets = app
                .nav
                .catalog()
                .category(&name)
                .map(|c| c.subsets.len())
                .ok_or_else(|| NavError::UnknownCategory(name.clone()))?;
            if subsets == 1 {
                return open_deck(app, &name, 0);
            }
            app.nav.select_category(&name)?;
            app.status_message = format!("{name}: {subsets} sets");
        }
        Action::OpenDeck { category, subset } => return open_deck(app, &category, subset),
        Action::NextCard => app.nav.next(),
        Action::PreviousCard => app.nav.previous(),
        Action::ToggleReveal => app.nav.toggle_reveal(),
        Action::Shuffle => {
            if app.nav.current_state().active_deck.is_empty() {
                return Err(NavError::NoActiveCard);
            }
            app.nav.shuffle();
            return Ok(Effect::Toast(SHUFFLED_TOAST.to_string()));
        }
        Action::ShowList => app.nav.show_screen(Screen::ListView)?,
        Action::BackToCards => app.nav.show_screen(Screen::Flashcard)?,
        Action::BackToCategory => {
            let single_set = app
                .nav
                .current_state()
                .active_category
                .as_deref()
                .and_then(|name| app.nav.catalog().category(name))
                .is_some_and(|c| c.subsets.len() == 1);
            // A one-set category has no menu of its own
            let target = if single_set {
                Screen::Home
            } else {
                Screen::CategoryMenu
            };
            app.nav.show_screen(target)?;
        }
        Action::JumpTo(index) => app.nav.jump_to(index)?,
        Action::Quit => {
            info!("Quit requested");
            return Ok(Effect::Quit);
        }
    }
    Ok(Effect::None)
}

fn open_deck(app: &mut App, category: &str, subset: usize) -> Result<Effect, NavError> {
    info!("Loading deck: {} / {}", category, subset_label(subset));
    app.nav.select_deck(category, subset)?;
    app.status_message = format!("{} · {}", category, subset_label(subset));
    if app.shuffle_on_open {
        app.nav.shuffle();
    }
    Ok(Effect::None)
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_open_multi_set_category_shows_menu() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenCategory("verbs".to_string()));
        assert_eq!(effect, Effect::None);
        let state = app.nav.current_state();
        assert_eq!(state.active_screen, Screen::CategoryMenu);
        assert_eq!(state.active_category.as_deref(), Some("verbs"));
        assert_eq!(app.status_message, "verbs: 2 sets");
    }

    #[test]
    fn test_open_single_set_category_goes_to_cards() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        let state = app.nav.current_state();
        assert_eq!(state.active_screen, Screen::Flashcard);
        assert_eq!(state.active_subset, Some(0));
        assert_eq!(app.nav.current_card().unwrap().latin, "aqua");
    }

    #[test]
    fn test_open_deck_then_walk() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDeck {
                category: "verbs".to_string(),
                subset: 1,
            },
        );
        assert_eq!(app.nav.current_card().unwrap().latin, "duco");
        update(&mut app, Action::NextCard);
        assert_eq!(app.nav.current_card().unwrap().latin, "capio");
        update(&mut app, Action::NextCard);
        assert_eq!(app.nav.current_card().unwrap().latin, "duco");
        update(&mut app, Action::PreviousCard);
        assert_eq!(app.nav.current_card().unwrap().latin, "capio");
        assert_eq!(app.status_message, "verbs · Set 2");
    }

    #[test]
    fn test_unknown_category_reports_and_keeps_state() {
        let mut app = test_app();
        let before = app.nav.current_state().clone();
        let effect = update(&mut app, Action::OpenCategory("nonexistent".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current_state(), &before);
        assert_eq!(app.status_message, "No deck found for: nonexistent");
    }

    #[test]
    fn test_shuffle_emits_toast() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::NextCard);
        let effect = update(&mut app, Action::Shuffle);
        assert_eq!(effect, Effect::Toast(SHUFFLED_TOAST.to_string()));
        assert_eq!(app.nav.current_state().active_index, 0);
    }

    #[test]
    fn test_shuffle_without_deck_is_rejected() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Shuffle), Effect::None);
        assert_eq!(app.status_message, "No active card");
    }

    #[test]
    fn test_shuffle_on_open() {
        let mut shuffled = test_app();
        shuffled.shuffle_on_open = true;
        update(&mut shuffled, Action::OpenCategory("nouns".to_string()));

        let mut plain = test_app();
        update(&mut plain, Action::OpenCategory("nouns".to_string()));

        let mut a = shuffled.nav.current_state().active_deck.clone();
        let mut b = plain.nav.current_state().active_deck.clone();
        assert_eq!(shuffled.nav.current_state().active_index, 0);
        a.sort_by(|x, y| x.latin.cmp(&y.latin));
        b.sort_by(|x, y| x.latin.cmp(&y.latin));
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_and_back() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::ShowList);
        assert_eq!(app.nav.current_state().active_screen, Screen::ListView);
        update(&mut app, Action::JumpTo(4));
        assert_eq!(app.nav.current_state().active_screen, Screen::Flashcard);
        assert_eq!(app.nav.current_card().unwrap().latin, "via");
        update(&mut app, Action::ShowList);
        update(&mut app, Action::BackToCards);
        assert_eq!(app.nav.current_state().active_index, 4);
    }

    #[test]
    fn test_back_to_category_menu() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDeck {
                category: "verbs".to_string(),
                subset: 0,
            },
        );
        update(&mut app, Action::BackToCategory);
        let state = app.nav.current_state();
        assert_eq!(state.active_screen, Screen::CategoryMenu);
        assert_eq!(state.active_category.as_deref(), Some("verbs"));
        assert_eq!(state.active_deck.len(), 3);
    }

    #[test]
    fn test_back_from_single_set_category_goes_home() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::BackToCategory);
        assert_eq!(app.nav.current_state().active_screen, Screen::Home);
    }

    #[test]
    fn test_other_category_deck_not_reachable_from_menu() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::GoHome);
        update(&mut app, Action::OpenCategory("verbs".to_string()));

        // The nouns cards are gone, so there is nothing to go back to
        assert_eq!(update(&mut app, Action::BackToCards), Effect::None);
        let state = app.nav.current_state();
        assert_eq!(state.active_screen, Screen::CategoryMenu);
        assert_eq!(state.active_subset, None);
        assert!(app.nav.current_card().is_err());
        assert_eq!(app.status_message, "No active card");
    }

    #[test]
    fn test_jump_out_of_range_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::JumpTo(99));
        assert_eq!(app.nav.current_state().active_index, 0);
        assert_eq!(app.status_message, "Card 99 out of range (deck has 6)");
    }

    #[test]
    fn test_go_home_resets_status() {
        let mut app = test_app();
        update(&mut app, Action::OpenCategory("nouns".to_string()));
        update(&mut app, Action::GoHome);
        assert_eq!(app.nav.current_state().active_screen, Screen::Home);
        assert_eq!(app.status_message, crate::core::state::WELCOME_MESSAGE);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
