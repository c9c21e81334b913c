//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key classification helpers shared across screens.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is the global interrupt (Ctrl+C), which exits from any
    /// screen. Plain `q` is screen-local: it quits only where it is not
    /// text input.
    #[must_use]
    pub fn is_interrupt_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_interrupt_event() {
        assert!(EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_non_interrupt_events() {
        assert!(!EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }
}
