//! # Core Application Logic
//!
//! This module contains flashdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (word data)  │
//!                    │  • Navigation (state)   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   tests    │
//!             │  Adapter   │          │ (no render │
//!             │ (ratatui)  │          │  needed)   │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `Card`, `Deck`, `Category`, `Catalog`
//! - [`catalog`]: loading a `Catalog` from JSON
//! - [`navigation`]: `NavigationController`, the one owner of what is on screen
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod card;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;

pub use action::{Action, Effect, update};
pub use navigation::{NavError, NavigationController, NavigationState, Screen};
