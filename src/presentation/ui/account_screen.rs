//! Account screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::view_models::AccountViewModel;

/// Action requested by the account screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    /// Nothing to do.
    None,
    /// Navigate back to the alias list.
    GoAliases,
    /// Log out and return to login.
    Logout,
    /// Exit the application.
    Quit,
}

/// State backing the account screen.
pub struct AccountScreenState {
    /// Account view-model.
    pub vm: AccountViewModel,
}

impl AccountScreenState {
    /// Creates a fresh screen state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vm: AccountViewModel::new(),
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> AccountAction {
        match key.code {
            KeyCode::Char('q') => AccountAction::Quit,
            KeyCode::Char('a') | KeyCode::Esc => AccountAction::GoAliases,
            KeyCode::Char('L') => AccountAction::Logout,
            _ => AccountAction::None,
        }
    }
}

impl Default for AccountScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &AccountScreenState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [content_area, footer_area] = layout.areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Account Information ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let lines = if self.vm.is_loading() {
            vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            ))]
        } else if let Some(message) = self.vm.error() {
            vec![Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            ))]
        } else if let Some(account) = self.vm.account() {
            vec![Line::from(vec![
                Span::raw("Email: "),
                Span::styled(
                    account.email.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])]
        } else {
            vec![Line::from("")]
        };

        Paragraph::new(lines).render(inner, buf);

        Paragraph::new(Span::styled(
            "a/Esc: Aliases | L: Logout | q: Quit",
            Style::default().fg(Color::DarkGray),
        ))
        .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_actions() {
        let mut state = AccountScreenState::new();

        assert_eq!(state.handle_key(key(KeyCode::Char('a'))), AccountAction::GoAliases);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), AccountAction::GoAliases);
        assert_eq!(state.handle_key(key(KeyCode::Char('L'))), AccountAction::Logout);
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), AccountAction::Quit);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut state = AccountScreenState::new();
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), AccountAction::None);
    }
}
