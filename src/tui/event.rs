use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C, quits from anywhere
    Home,
    Back,
    Confirm,
    CursorUp,
    CursorDown,
    /// Digit shortcut, zero-based (`1` picks entry 0)
    Pick(usize),
    Next,
    Previous,
    Reveal,
    Shuffle,
    ShowList,
    Click(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(raw) => map_event(raw),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

pub fn map_event(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases and repeats as separate events
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => Some(TuiEvent::Home),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Enter) => Some(TuiEvent::Confirm),
        (_, KeyCode::Char(' ')) => Some(TuiEvent::Reveal),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) | (_, KeyCode::Char('n')) => {
            Some(TuiEvent::Next)
        }
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) | (_, KeyCode::Char('p')) => {
            Some(TuiEvent::Previous)
        }
        (_, KeyCode::Char('s')) => Some(TuiEvent::Shuffle),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ShowList),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Pick(c as usize - '1' as usize)),
        _ => None,
    }
}
