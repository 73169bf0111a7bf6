//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: screen, active deck, progress and status
//! - `FlashcardView`: a single card, front or back
//! - `Toast`: short-lived notice
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Menu` / `MenuState`: category and set pickers
//! - `WordList` / `WordListState`: table of the active deck
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs
//! ├── menu.rs
//! ├── flashcard.rs
//! ├── word_list.rs
//! └── toast.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod flashcard;
pub mod menu;
mod title_bar;
pub mod toast;
pub mod word_list;

pub use flashcard::FlashcardView;
pub use menu::{Menu, MenuEvent, MenuItem, MenuState};
pub use title_bar::TitleBar;
pub use toast::Toast;
pub use word_list::{WordList, WordListEvent, WordListState};

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
