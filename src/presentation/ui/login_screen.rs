//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::ports::Credentials;
use crate::presentation::widgets::TextInput;

/// Login screen lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Accepting input.
    Input,
    /// Credentials submitted, waiting on the backend.
    Validating,
    /// Login rejected.
    Error,
}

/// Focused form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusedField {
    Email,
    Password,
}

/// Action requested by the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    /// Nothing to do.
    None,
    /// Submit the entered credentials.
    Submit,
}

/// Login screen UI.
pub struct LoginScreen {
    email_input: TextInput,
    password_input: TextInput,
    focused: FocusedField,
    state: LoginState,
    error_message: Option<String>,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut email_input =
            TextInput::new("Email").placeholder("you@example.com");
        email_input.set_focused(true);

        let password_input = TextInput::new("Password").password();

        Self {
            email_input,
            password_input,
            focused: FocusedField::Email,
            state: LoginState::Input,
            error_message: None,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Returns entered credentials, if both fields are filled.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        let email = self.email_input.value();
        let password = self.password_input.value();

        if email.is_empty() || password.is_empty() {
            None
        } else {
            Some(Credentials::new(email, password))
        }
    }

    /// Sets validating state.
    pub fn set_validating(&mut self) {
        self.state = LoginState::Validating;
        self.error_message = None;
    }

    /// Sets error state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.error_message = Some(message.into());
    }

    /// Resets to input state, clearing the password.
    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.error_message = None;
        self.password_input.clear();
        self.focus(FocusedField::Email);
    }

    fn focus(&mut self, field: FocusedField) {
        self.focused = field;
        self.email_input
            .set_focused(field == FocusedField::Email);
        self.password_input
            .set_focused(field == FocusedField::Password);
    }

    fn toggle_focus(&mut self) {
        match self.focused {
            FocusedField::Email => self.focus(FocusedField::Password),
            FocusedField::Password => self.focus(FocusedField::Email),
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Validating {
            return LoginAction::None;
        }

        if self.state == LoginState::Error {
            self.state = LoginState::Input;
            self.error_message = None;
        }

        match key.code {
            KeyCode::Enter => {
                if self.credentials().is_some() {
                    return LoginAction::Submit;
                }
                // Enter on a half-filled form moves to the empty field.
                if self.email_input.value().is_empty() {
                    self.focus(FocusedField::Email);
                } else {
                    self.focus(FocusedField::Password);
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.toggle_focus();
            }
            _ => {
                match self.focused {
                    FocusedField::Email => self.email_input.handle_key(key),
                    FocusedField::Password => self.password_input.handle_key(key),
                };
            }
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Aliasdeck Login ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<5>(inner);

        let title = Paragraph::new("Sign in to your alias account")
            .style(Style::default().fg(Color::White));
        title.render(areas[0], buf);

        (&self.email_input).render(areas[1], buf);
        (&self.password_input).render(areas[2], buf);

        let status = match self.state {
            LoginState::Input => Line::from(vec![
                Span::styled("Enter: Login", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Switch field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
            ]),
            LoginState::Validating => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Error => {
                let msg = self.error_message.as_deref().unwrap_or("Unknown error");
                Line::from(Span::styled(
                    format!("Error: {msg}"),
                    Style::default().fg(Color::Red),
                ))
            }
        };
        let status_para = Paragraph::new(status);
        status_para.render(areas[4], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
