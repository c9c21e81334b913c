//! Alias list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::application::view_models::{AliasListView, AliasViewModel};
use crate::domain::entities::Alias;
use crate::presentation::widgets::TextInput;

/// Action requested by the alias screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasAction {
    /// Nothing to do.
    None,
    /// Copy the address to the clipboard.
    Copy(String),
    /// Navigate to the account screen.
    GoAccount,
    /// Log out and return to login.
    Logout,
    /// Exit the application.
    Quit,
}

/// State backing the alias screen: the view-model plus cursor and search
/// focus, which are purely presentational.
pub struct AliasScreenState {
    /// Alias list view-model.
    pub vm: AliasViewModel,
    search_input: TextInput,
    search_focused: bool,
    selected: usize,
}

impl AliasScreenState {
    /// Creates a fresh screen state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vm: AliasViewModel::new(),
            search_input: TextInput::new("Search").placeholder("Search aliases..."),
            search_focused: false,
            selected: 0,
        }
    }

    /// Clears screen-local state alongside the view-model. Used on logout.
    pub fn reset(&mut self) {
        self.vm.reset();
        self.search_input.clear();
        self.search_focused = false;
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.vm.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn selected_alias(&self) -> Option<&Alias> {
        self.vm.visible().into_iter().nth(self.selected)
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> AliasAction {
        if self.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.search_focused = false;
                    self.search_input.set_focused(false);
                }
                _ => {
                    if self.search_input.handle_key(key) {
                        self.vm.set_search_query(self.search_input.value());
                        self.selected = 0;
                    }
                }
            }
            return AliasAction::None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.search_focused = true;
                self.search_input.set_focused(true);
            }
            KeyCode::Char('q') => return AliasAction::Quit,
            KeyCode::Char('a') => return AliasAction::GoAccount,
            KeyCode::Char('L') => return AliasAction::Logout,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_alias().map(|alias| alias.id) {
                    self.vm.toggle_expand(id);
                }
            }
            KeyCode::Char('c') | KeyCode::Char('y') => {
                if let Some(address) = self.selected_alias().map(|alias| alias.address.clone()) {
                    return AliasAction::Copy(address);
                }
            }
            _ => {}
        }

        AliasAction::None
    }
}

impl Default for AliasScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// Alias list screen widget.
pub struct AliasScreen;

impl AliasScreen {
    /// Creates the widget.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn alias_item<'a>(state: &AliasScreenState, alias: &'a Alias) -> ListItem<'a> {
        let expanded = state.vm.expanded() == Some(alias.id);
        let marker = if expanded { "▾ " } else { "▸ " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::raw(alias.address.clone()),
        ];
        if state.vm.is_copied(&alias.address) {
            spans.push(Span::styled(
                "  copied!",
                Style::default().fg(Color::Green),
            ));
        }

        let mut lines = vec![Line::from(spans)];

        if expanded {
            for forwarding in &alias.forwarding_addresses {
                lines.push(Line::from(Span::styled(
                    format!("    ⟶ {}", forwarding.address),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("    • {}", alias.status),
                Style::default().fg(Color::DarkGray),
            )));
        }

        ListItem::new(lines)
    }

    fn render_list(state: &AliasScreenState, area: Rect, buf: &mut Buffer) {
        let centered_message = |text: &str, color: Color| {
            Paragraph::new(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(color),
            )))
        };

        match state.vm.list_view() {
            AliasListView::Loading => {
                centered_message("Loading aliases...", Color::Yellow).render(area, buf);
            }
            AliasListView::Failed(message) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Error loading aliases",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        message.to_string(),
                        Style::default().fg(Color::Red),
                    )),
                ];
                Paragraph::new(lines).render(area, buf);
            }
            AliasListView::Empty => {
                centered_message(
                    "No aliases found. Create your first alias!",
                    Color::DarkGray,
                )
                .render(area, buf);
            }
            AliasListView::NoMatches => {
                centered_message("No matching aliases found", Color::DarkGray).render(area, buf);
            }
            AliasListView::Aliases(aliases) => {
                let items: Vec<ListItem> = aliases
                    .iter()
                    .map(|alias| Self::alias_item(state, alias))
                    .collect();

                let list = List::new(items)
                    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

                let mut list_state = ListState::default();
                list_state.select(Some(state.selected));

                StatefulWidget::render(list, area, buf, &mut list_state);
            }
        }
    }

    fn render_footer(state: &AliasScreenState, area: Rect, buf: &mut Buffer) {
        let hint = if state.search_focused {
            "Esc/Enter: Leave search"
        } else {
            "/: Search | Enter: Expand | c: Copy | a: Account | L: Logout | q: Quit"
        };

        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

impl Default for AliasScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for AliasScreen {
    type State = AliasScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.clamp_selection();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [search_area, list_area, footer_area] = layout.areas(area);

        (&state.search_input).render(search_area, buf);
        Self::render_list(state, list_area, buf);
        Self::render_footer(state, footer_area, buf);
    }
}
