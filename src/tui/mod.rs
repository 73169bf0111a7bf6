//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop only redraws after an event or when a toast expires. While a
//! toast is up it polls every 100ms so the toast disappears on time;
//! otherwise it sleeps up to 500ms between polls.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FlashcardView, MenuEvent, MenuState, Toast, WordListEvent, WordListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const TOAST_POLL: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub home_menu: MenuState,
    pub category_menu: MenuState,
    pub word_list: WordListState,
    pub toast: Option<Toast>,
    toast_duration: Duration,
    // What the menus were last built for
    last_screen: Screen,
    menu_category: Option<String>,
}

impl TuiState {
    pub fn new(app: &App, toast_duration_ms: u64) -> Self {
        Self {
            home_menu: MenuState::new(app.nav.catalog().len()),
            category_menu: MenuState::new(0),
            word_list: WordListState::new(),
            toast: None,
            toast_duration: Duration::from_millis(toast_duration_ms),
            last_screen: Screen::Home,
            menu_category: None,
        }
    }

    /// Rebuild presentation state that depends on where the core now is.
    pub fn sync(&mut self, app: &App) {
        let state = app.nav.current_state();

        if state.active_category != self.menu_category {
            let sets = state
                .active_category
                .as_deref()
                .and_then(|name| app.nav.catalog().category(name))
                .map_or(0, |c| c.subsets.len());
            self.category_menu = MenuState::new(sets);
            self.menu_category = state.active_category.clone();
        }

        if state.active_screen == Screen::ListView && self.last_screen != Screen::ListView {
            self.word_list
                .open(state.active_deck.len(), state.active_index);
        }

        self.last_screen = state.active_screen;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast = Some(Toast::new(message, self.toast_duration));
    }

    /// Drop the toast once its time is up. Returns true if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }
}

/// Translate a terminal event into a core action for the current screen.
///
/// `frame_area` is the full terminal area, used to hit-test mouse clicks
/// against the same layout `ui::draw_ui` produces.
pub fn dispatch(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Home => return Some(Action::GoHome),
        TuiEvent::Resize => return None,
        _ => {}
    }

    let state = app.nav.current_state();
    let area = ui::main_area(frame_area);

    match state.active_screen {
        Screen::Home => match menu_event(&mut tui.home_menu, event, area)? {
            MenuEvent::Select(index) => app
                .nav
                .catalog()
                .categories()
                .get(index)
                .map(|c| Action::OpenCategory(c.name.clone())),
            MenuEvent::Back => None,
        },
        Screen::CategoryMenu => {
            let category = state.active_category.clone()?;
            match menu_event(&mut tui.category_menu, event, area)? {
                MenuEvent::Select(subset) => Some(Action::OpenDeck { category, subset }),
                MenuEvent::Back => Some(Action::GoHome),
            }
        }
        Screen::Flashcard => match *event {
            TuiEvent::Next => Some(Action::NextCard),
            TuiEvent::Previous => Some(Action::PreviousCard),
            TuiEvent::Reveal | TuiEvent::Confirm => Some(Action::ToggleReveal),
            TuiEvent::Shuffle => Some(Action::Shuffle),
            TuiEvent::ShowList => Some(Action::ShowList),
            TuiEvent::Back => Some(Action::BackToCategory),
            TuiEvent::Click(column, row) => {
                let card = app.nav.current_card().ok()?;
                FlashcardView::new(card, state.revealed)
                    .card_rect(area)
                    .contains(Position::new(column, row))
                    .then_some(Action::ToggleReveal)
            }
            _ => None,
        },
        Screen::ListView => {
            let list_event = match *event {
                TuiEvent::Click(_, row) => tui.word_list.hit_test(row, area).map(|index| {
                    tui.word_list.table_state.select(Some(index));
                    WordListEvent::Jump(index)
                }),
                _ => tui.word_list.handle_event(event),
            };
            match list_event? {
                WordListEvent::Jump(index) => Some(Action::JumpTo(index)),
                WordListEvent::Back => Some(Action::BackToCards),
            }
        }
    }
}

fn menu_event(menu: &mut MenuState, event: &TuiEvent, area: Rect) -> Option<MenuEvent> {
    match *event {
        TuiEvent::Click(column, row) => menu.hit_test(column, row, area).map(|index| {
            menu.select(index);
            MenuEvent::Select(index)
        }),
        _ => menu.handle_event(event),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app, config.toast_duration_ms);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e));

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.toast.is_some() {
            TOAST_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            let Some(action) = dispatch(&event, &app, &mut tui, frame_area) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::Toast(message) => tui.show_toast(message),
                Effect::None => {}
            }
            tui.sync(&app);
        }

        if should_quit {
            break;
        }

        if tui.expire_toast(Instant::now()) {
            needs_redraw = true;
        }
    }

    ratatui::restore();
    info!("Terminal restored");
    Ok(())
}
