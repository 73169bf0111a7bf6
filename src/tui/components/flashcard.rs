//! # Flashcard Component
//!
//! One card, centered. The front shows the Latin word and its pronunciation;
//! flipping adds the English meaning underneath.
//!
//! The card box is sized from its content so a click can be hit-tested
//! against the same rectangle that was drawn (see [`FlashcardView::card_rect`]).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::card::Card;
use crate::tui::component::Component;

/// Border (2) + padding (4) around the card text
const HORIZONTAL_OVERHEAD: u16 = 6;
/// Border (2) + blank line above and below the text
const VERTICAL_OVERHEAD: u16 = 4;
const MIN_CARD_WIDTH: u16 = 30;
const MAX_CARD_WIDTH: u16 = 60;

pub struct FlashcardView<'a> {
    pub card: &'a Card,
    pub revealed: bool,
}

impl<'a> FlashcardView<'a> {
    pub fn new(card: &'a Card, revealed: bool) -> Self {
        Self { card, revealed }
    }

    /// Width available for text inside a card drawn in `area`.
    fn text_width(&self, area: Rect) -> u16 {
        // Pronunciation is drawn between slashes
        let widest = [
            self.card.latin.width(),
            self.card.pronunciation.width() + 2,
            if self.revealed {
                self.card.english.width()
            } else {
                0
            },
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let limit = MAX_CARD_WIDTH.min(area.width.saturating_sub(2));
        let wanted = (widest + HORIZONTAL_OVERHEAD as usize).min(limit as usize) as u16;
        wanted
            .max(MIN_CARD_WIDTH.min(limit))
            .saturating_sub(HORIZONTAL_OVERHEAD)
    }

    fn lines(&self, text_width: u16) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.card.latin.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("/{}/", self.card.pronunciation),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        if self.revealed {
            lines.push(Line::from(Span::styled(
                "─".repeat(text_width.min(20) as usize),
                Style::default().fg(Color::DarkGray),
            )));
            let width = (text_width as usize).max(1);
            for wrapped in textwrap::wrap(&self.card.english, width) {
                lines.push(Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(Color::Green),
                )));
            }
        }
        lines
    }

    /// The rectangle the card occupies when rendered into `area`.
    pub fn card_rect(&self, area: Rect) -> Rect {
        let text_width = self.text_width(area);
        let width = (text_width + HORIZONTAL_OVERHEAD).min(area.width);
        let height =
            (self.lines(text_width).len() as u16 + VERTICAL_OVERHEAD).min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Component for FlashcardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = self.card_rect(area);
        let text_width = self.text_width(area);

        let (title, border) = if self.revealed {
            (" Back ", Style::default().fg(Color::Green))
        } else {
            (" Front ", Style::default().fg(Color::Cyan))
        };

        let mut lines = vec![Line::default()];
        lines.extend(self.lines(text_width));

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );

        frame.render_widget(Clear, rect);
        frame.render_widget(card, rect);
    }
}
