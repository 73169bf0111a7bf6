//! # TitleBar Component
//!
//! Top status bar: screen, active deck, progress and the status message.
//!
//! Stateless. It receives all data as props and renders a single line:
//!
//! 1. **In a deck**: `"flashdeck | Flashcards | verbs · Set 1 | 3 / 10 | status"`
//! 2. **In a category**: `"flashdeck | Category | verbs | status"`
//! 3. **Home**: `"flashdeck | Home | status"`
//!
//! Empty segments are skipped so narrow terminals keep the important parts.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub screen_label: String,
    /// "verbs · Set 1", or just the category, or empty
    pub location: String,
    /// One-based position and deck length
    pub progress: Option<(usize, usize)>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        screen_label: String,
        location: String,
        progress: Option<(usize, usize)>,
        status_message: String,
    ) -> Self {
        Self {
            screen_label,
            location,
            progress,
            status_message,
        }
    }

    pub fn title_text(&self) -> String {
        let mut parts = vec!["flashdeck".to_string(), self.screen_label.clone()];
        if !self.location.is_empty() {
            parts.push(self.location.clone());
        }
        if let Some((position, total)) = self.progress {
            parts.push(format!("{position} / {total}"));
        }
        if !self.status_message.is_empty() && self.status_message != self.location {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
