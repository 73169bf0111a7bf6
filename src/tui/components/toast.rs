//! # Toast Component
//!
//! Short-lived notice drawn over the bottom of the screen ("Shuffled
//! successfully!"). The event loop drops it once `is_expired` reports true.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: String, duration: Duration) -> Self {
        Self::shown_at(message, duration, Instant::now())
    }

    pub fn shown_at(message: String, duration: Duration, now: Instant) -> Self {
        Self {
            message,
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Bottom-centered box just wide enough for the message.
    pub fn toast_rect(&self, area: Rect) -> Rect {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height - height,
            width,
            height,
        }
    }
}

impl Component for Toast {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = self.toast_rect(area);
        let paragraph = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let now = Instant::now();
        let toast = Toast::shown_at("hi".to_string(), Duration::from_millis(1500), now);
        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::from_millis(1499)));
        assert!(toast.is_expired(now + Duration::from_millis(1500)));
    }

    #[test]
    fn test_toast_rect_sits_at_bottom_center() {
        let toast = Toast::new("Shuffled successfully!".to_string(), Duration::ZERO);
        let rect = toast.toast_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.y, 21);
        assert_eq!(rect.x, 27);
    }
}
