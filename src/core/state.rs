//! # Application State
//!
//! Core business state for flashdeck. Domain logic only, no TUI-specific
//! types. Presentation state (menu cursors, toast timers) lives in `tui`.
//!
//! ```text
//! App
//! ├── nav: NavigationController   // catalog + what is showing
//! ├── status_message: String      // status bar text
//! └── shuffle_on_open: bool       // shuffle every deck as it opens
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::card::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationController;

pub const WELCOME_MESSAGE: &str = "Pick a deck to begin";

pub struct App {
    pub nav: NavigationController,
    pub status_message: String,
    pub shuffle_on_open: bool,
}

impl App {
    pub fn new(nav: NavigationController) -> Self {
        Self {
            nav,
            status_message: String::from(WELCOME_MESSAGE),
            shuffle_on_open: false,
        }
    }

    /// Create an App wired from resolved configuration.
    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let nav = match config.seed {
            Some(seed) => NavigationController::with_seed(catalog, seed),
            None => NavigationController::new(catalog),
        };
        let mut app = Self::new(nav);
        app.shuffle_on_open = config.shuffle_on_open;
        app
    }
}
