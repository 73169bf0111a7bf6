//! # WordList Component
//!
//! Every card of the active deck in a table. Selecting a row (Enter or a
//! mouse click) jumps back to the flashcard view at that card.
//!
//! `WordListState` lives in `TuiState`; `WordList` borrows it each frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::core::card::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top border + header row
const ROWS_ABOVE_BODY: u16 = 2;

pub struct WordListState {
    pub table_state: TableState,
    pub len: usize,
}

impl Default for WordListState {
    fn default() -> Self {
        Self::new()
    }
}

impl WordListState {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            len: 0,
        }
    }

    /// Point the table at the deck about to be shown, selecting the active card.
    pub fn open(&mut self, len: usize, active_index: usize) {
        self.len = len;
        self.table_state = TableState::default();
        if len > 0 {
            self.table_state.select(Some(active_index.min(len - 1)));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Which deck index sits under screen row `row`, if any.
    pub fn hit_test(&self, row: u16, area: Rect) -> Option<usize> {
        let body_top = area.y + ROWS_ABOVE_BODY;
        let body_bottom = (area.y + area.height).saturating_sub(1);
        if row < body_top || row >= body_bottom {
            return None;
        }
        let index = self.table_state.offset() + (row - body_top) as usize;
        (index < self.len).then_some(index)
    }
}

impl EventHandler for WordListState {
    type Event = WordListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<WordListEvent> {
        match event {
            TuiEvent::Back | TuiEvent::ShowList => Some(WordListEvent::Back),
            TuiEvent::CursorUp | TuiEvent::Previous => {
                if self.len > 0 {
                    let current = self.selected().unwrap_or(0);
                    self.table_state.select(Some(current.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::Next => {
                if self.len > 0 {
                    let next = self.selected().map_or(0, |i| (i + 1).min(self.len - 1));
                    self.table_state.select(Some(next));
                }
                None
            }
            TuiEvent::Confirm | TuiEvent::Reveal => self.selected().map(WordListEvent::Jump),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListEvent {
    Jump(usize),
    Back,
}

pub struct WordList<'a> {
    state: &'a mut WordListState,
    cards: &'a [Card],
    /// Card currently shown on the flashcard screen
    active_index: usize,
}

impl<'a> WordList<'a> {
    pub fn new(state: &'a mut WordListState, cards: &'a [Card], active_index: usize) -> Self {
        Self {
            state,
            cards,
            active_index,
        }
    }
}

impl Component for WordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["#", "Latin", "Pronunciation", "English"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = self.cards.iter().enumerate().map(|(i, card)| {
            let style = if i == self.active_index {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(card.latin.as_str()),
                Cell::from(card.pronunciation.as_str()),
                Cell::from(card.english.as_str()),
            ])
            .style(style)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" All Words ({}) ", self.cards.len())),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("aqua", "AH-kwah", "water"),
            Card::new("terra", "TEH-rah", "earth"),
            Card::new("via", "WEE-ah", "road"),
        ]
    }

    #[test]
    fn test_open_selects_active_card() {
        let mut state = WordListState::new();
        state.open(3, 2);
        assert_eq!(state.selected(), Some(2));
        state.open(3, 10);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_confirm_jumps_to_selection() {
        let mut state = WordListState::new();
        state.open(3, 0);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Confirm),
            Some(WordListEvent::Jump(1))
        );
    }

    #[test]
    fn test_cursor_stays_inside_table() {
        let mut state = WordListState::new();
        state.open(3, 0);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_hit_test_skips_border_and_header() {
        let mut state = WordListState::new();
        state.open(3, 0);
        let area = Rect::new(0, 1, 80, 20);
        assert_eq!(state.hit_test(1, area), None); // border
        assert_eq!(state.hit_test(2, area), None); // header
        assert_eq!(state.hit_test(3, area), Some(0));
        assert_eq!(state.hit_test(5, area), Some(2));
        assert_eq!(state.hit_test(6, area), None); // past the last card
    }

    #[test]
    fn test_table_renders_all_columns() {
        let cards = cards();
        let mut state = WordListState::new();
        state.open(cards.len(), 1);
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| WordList::new(&mut state, &cards, 1).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("All Words (3)"));
        assert!(text.contains("Pronunciation"));
        assert!(text.contains("terra"));
        assert!(text.contains("TEH-rah"));
        assert!(text.contains("road"));
    }
}
