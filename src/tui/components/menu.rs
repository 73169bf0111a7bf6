//! # Menu Component
//!
//! Centered list of choices. Used for the category buttons on the home screen
//! and for the set buttons inside a category.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `Menu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent selection state for a menu.
pub struct MenuState {
    pub selected: usize,
    pub len: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            selected: 0,
            len,
            list_state,
        }
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Which entry sits under screen row `row`, if any.
    pub fn hit_test(&self, column: u16, row: u16, area: Rect) -> Option<usize> {
        let list = Menu::list_area(area);
        if column < list.x
            || column >= list.x + list.width
            || row < list.y
            || row >= list.y + list.height
        {
            return None;
        }
        let index = self.list_state.offset() + (row - list.y) as usize;
        (index < self.len).then_some(index)
    }
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Back => Some(MenuEvent::Back),
            TuiEvent::CursorUp | TuiEvent::Previous => {
                if self.len > 0 {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::Next => {
                if self.len > 0 {
                    self.select((self.selected + 1).min(self.len - 1));
                }
                None
            }
            TuiEvent::Confirm | TuiEvent::Reveal if self.len > 0 => {
                Some(MenuEvent::Select(self.selected))
            }
            TuiEvent::Pick(index) if *index < self.len => {
                self.select(*index);
                Some(MenuEvent::Select(*index))
            }
            _ => None,
        }
    }
}

/// Events emitted by a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(usize),
    Back,
}

pub struct MenuItem {
    pub label: String,
    pub detail: String,
}

/// Transient render wrapper for a menu.
pub struct Menu<'a> {
    state: &'a mut MenuState,
    title: &'a str,
    items: &'a [MenuItem],
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState, title: &'a str, items: &'a [MenuItem]) -> Self {
        Self {
            state,
            title,
            items,
        }
    }

    fn frame_area(area: Rect) -> Rect {
        centered_rect(60, 70, area)
    }

    /// Rows occupied by list entries: inside the border, inside the padding.
    pub fn list_area(area: Rect) -> Rect {
        let outer = Self::frame_area(area);
        Rect {
            x: outer.x + 2,
            y: outer.y + 1,
            width: outer.width.saturating_sub(4),
            height: outer.height.saturating_sub(2),
        }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::frame_area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing here.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let shortcut = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    "  ".to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
                    Span::styled(item.label.clone(), style),
                    Span::styled(
                        format!("  {}", item.detail),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
