//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::navigation::{self, Route};
use crate::application::session::SessionStore;
use crate::domain::entities::{Account, Alias};
use crate::domain::errors::FetchError;
use crate::domain::ports::AliasDataPort;
use crate::infrastructure::ClipboardService;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    AccountAction, AccountScreenState, AliasAction, AliasScreen, AliasScreenState, LoginAction,
    LoginScreen,
};

const COPY_CONFIRM_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug)]
enum Action {
    AliasesFetched {
        epoch: u64,
        result: Result<Vec<Alias>, FetchError>,
    },
    AccountFetched {
        epoch: u64,
        result: Result<Account, FetchError>,
    },
    LoginCompleted {
        succeeded: bool,
    },
    CopyMarkerExpired {
        seq: u64,
    },
}

/// Top-level application: owns the session, the screens, and the event loop.
pub struct App {
    session: Arc<SessionStore>,
    data: Arc<dyn AliasDataPort>,
    clipboard: ClipboardService,
    route: Route,
    login_screen: LoginScreen,
    alias_screen: AliasScreenState,
    account_screen: AccountScreenState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    exiting: bool,
}

impl App {
    /// Creates the application.
    #[must_use]
    pub fn new(session: Arc<SessionStore>, data: Arc<dyn AliasDataPort>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            session,
            data,
            clipboard: ClipboardService::new(),
            route: Route::Login,
            login_screen: LoginScreen::new(),
            alias_screen: AliasScreenState::new(),
            account_screen: AccountScreenState::new(),
            action_tx,
            action_rx,
            exiting: false,
        }
    }

    /// Runs the application until exit.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.session.init_from_storage().await {
            info!("Resuming stored session");
        }

        self.navigate(navigation::landing(self.session.is_authenticated()));

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event).await == EventResult::Exit {
                        self.exiting = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match self.route {
            Route::Login => frame.render_widget(&self.login_screen, frame.area()),
            Route::Aliases => {
                frame.render_stateful_widget(
                    AliasScreen::new(),
                    frame.area(),
                    &mut self.alias_screen,
                );
            }
            Route::Account => frame.render_widget(&self.account_screen, frame.area()),
        }
    }

    /// Moves to a route, passing it through the navigation guard and
    /// activating the target view's fetch.
    fn navigate(&mut self, requested: Route) {
        let resolved = navigation::resolve(requested, self.session.is_authenticated());

        if resolved != requested {
            debug!(?requested, "Unauthenticated, redirecting to login");
        }

        self.route = resolved;

        match resolved {
            Route::Login => {}
            Route::Aliases => self.activate_aliases(),
            Route::Account => self.activate_account(),
        }
    }

    fn activate_aliases(&mut self) {
        let Some(token) = self.session.token() else {
            return;
        };

        if let Some(ticket) = self.alias_screen.vm.activate(&token) {
            debug!(epoch = ticket.epoch, "Fetching aliases");

            let data = Arc::clone(&self.data);
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                let result = data.fetch_aliases(&ticket.token).await;
                let _ = tx.send(Action::AliasesFetched {
                    epoch: ticket.epoch,
                    result,
                });
            });
        }
    }

    fn activate_account(&mut self) {
        let Some(token) = self.session.token() else {
            return;
        };

        if let Some(ticket) = self.account_screen.vm.activate(&token) {
            debug!(epoch = ticket.epoch, "Fetching account");

            let data = Arc::clone(&self.data);
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                let result = data.fetch_account(&ticket.token).await;
                let _ = tx.send(Action::AccountFetched {
                    epoch: ticket.epoch,
                    result,
                });
            });
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AliasesFetched { epoch, result } => {
                if let Err(e) = &result {
                    warn!(error = %e, "Alias fetch failed");
                }
                self.alias_screen.vm.apply_fetch(epoch, result);
            }
            Action::AccountFetched { epoch, result } => {
                if let Err(e) = &result {
                    warn!(error = %e, "Account fetch failed");
                }
                self.account_screen.vm.apply_fetch(epoch, result);
            }
            Action::LoginCompleted { succeeded } => {
                if succeeded {
                    self.login_screen.reset();
                    self.navigate(Route::Aliases);
                } else {
                    self.login_screen
                        .set_error("Login failed. Check your credentials.");
                }
            }
            Action::CopyMarkerExpired { seq } => {
                self.alias_screen.vm.clear_copied(seq);
            }
        }
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_interrupt_event(&key) {
            return EventResult::Exit;
        }

        match self.route {
            Route::Login => {
                if key.code == KeyCode::Esc {
                    return EventResult::Exit;
                }
                if self.login_screen.handle_key(key) == LoginAction::Submit {
                    self.handle_login_submit();
                }
            }
            Route::Aliases => match self.alias_screen.handle_key(key) {
                AliasAction::None => {}
                AliasAction::Copy(address) => self.handle_copy(address).await,
                AliasAction::GoAccount => self.navigate(Route::Account),
                AliasAction::Logout => self.handle_logout().await,
                AliasAction::Quit => return EventResult::Exit,
            },
            Route::Account => match self.account_screen.handle_key(key) {
                AccountAction::None => {}
                AccountAction::GoAliases => self.navigate(Route::Aliases),
                AccountAction::Logout => self.handle_logout().await,
                AccountAction::Quit => return EventResult::Exit,
            },
        }

        EventResult::Continue
    }

    /// Starts the login request as a background task so the event loop keeps
    /// drawing while the backend responds. The validating state on the login
    /// screen blocks re-submission until the completion action arrives.
    fn handle_login_submit(&mut self) {
        let Some(credentials) = self.login_screen.credentials() else {
            return;
        };

        self.login_screen.set_validating();

        let session = Arc::clone(&self.session);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let succeeded = session.login(credentials).await;
            let _ = tx.send(Action::LoginCompleted { succeeded });
        });
    }

    async fn handle_logout(&mut self) {
        self.session.logout().await;
        self.alias_screen.reset();
        self.account_screen.vm.reset();
        self.login_screen = LoginScreen::new();
        self.route = Route::Login;
    }

    async fn handle_copy(&mut self, address: String) {
        if self.clipboard.copy_text(address.clone()).await {
            let seq = self.alias_screen.vm.mark_copied(address);
            self.schedule_copy_clear(seq);
        }
    }

    /// Schedules the single-shot clear of the copy marker. A later copy
    /// bumps the sequence number, so an expired timer from an earlier copy
    /// never clears a newer marker.
    fn schedule_copy_clear(&self, seq: u64) {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPY_CONFIRM_DURATION).await;
            let _ = tx.send(Action::CopyMarkerExpired { seq });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AliasId, AliasStatus, SessionToken};
    use crate::domain::ports::mocks::{MockAliasData, MockAuthPort, MockTokenStorage};
    use crate::domain::ports::{Credentials, TokenStoragePort};
    use crate::presentation::ui::LoginState;
    use crossterm::event::KeyModifiers;

    fn alias(id: i64, address: &str) -> Alias {
        Alias {
            id: AliasId(id),
            address: address.to_string(),
            forwarding_addresses: vec![],
            status: AliasStatus::Active,
        }
    }

    fn make_app(data: Arc<MockAliasData>) -> App {
        let session = Arc::new(SessionStore::new(
            Arc::new(MockAuthPort::new(true)),
            Arc::new(MockTokenStorage::new()),
        ));
        App::new(session, data)
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).await;
    }

    async fn submit_login(app: &mut App, email: &str, password: &str) {
        for c in email.chars() {
            press(app, KeyCode::Char(c)).await;
        }
        press(app, KeyCode::Tab).await;
        for c in password.chars() {
            press(app, KeyCode::Char(c)).await;
        }
        press(app, KeyCode::Enter).await;
    }

    async fn settle(app: &mut App) {
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }
        tokio::task::yield_now().await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }
    }

    #[tokio::test]
    async fn test_guard_redirects_unauthenticated_navigation() {
        let mut app = make_app(Arc::new(MockAliasData::new(vec![])));

        app.navigate(Route::Aliases);
        assert_eq!(app.route, Route::Login);

        app.navigate(Route::Account);
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_login_lands_on_aliases() {
        let mut app = make_app(Arc::new(MockAliasData::new(vec![alias(1, "a@x.com")])));

        app.session
            .login(Credentials::new("user@example.com", "pw"))
            .await;
        app.navigate(Route::Aliases);

        assert_eq!(app.route, Route::Aliases);
        settle(&mut app).await;
        assert_eq!(app.alias_screen.vm.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_runs_login_off_the_event_loop() {
        let mut app = make_app(Arc::new(MockAliasData::new(vec![alias(1, "a@x.com")])));

        submit_login(&mut app, "user@example.com", "pw").await;

        // The submit keystroke only schedules the request; the screen stays
        // in the validating state until the completion action arrives.
        assert_eq!(app.login_screen.state(), LoginState::Validating);
        assert_eq!(app.route, Route::Login);

        settle(&mut app).await;
        assert_eq!(app.route, Route::Aliases);
        settle(&mut app).await;
        assert_eq!(app.alias_screen.vm.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_error_state() {
        let session = Arc::new(SessionStore::new(
            Arc::new(MockAuthPort::new(false)),
            Arc::new(MockTokenStorage::new()),
        ));
        let mut app = App::new(session, Arc::new(MockAliasData::new(vec![])));

        submit_login(&mut app, "user@example.com", "bad").await;
        settle(&mut app).await;

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login_screen.state(), LoginState::Error);
    }

    #[tokio::test]
    async fn test_repeated_activation_fetches_once() {
        let data = Arc::new(MockAliasData::new(vec![alias(1, "a@x.com")]));
        let mut app = make_app(data.clone());

        app.session
            .login(Credentials::new("user@example.com", "pw"))
            .await;

        app.navigate(Route::Aliases);
        app.navigate(Route::Aliases);
        settle(&mut app).await;
        app.navigate(Route::Aliases);
        settle(&mut app).await;

        assert_eq!(data.alias_fetches(), 1);
    }

    #[tokio::test]
    async fn test_relogin_triggers_refetch() {
        let data = Arc::new(MockAliasData::new(vec![alias(1, "a@x.com")]));
        let mut app = make_app(data.clone());

        app.session
            .login(Credentials::new("first@example.com", "pw"))
            .await;
        app.navigate(Route::Aliases);
        settle(&mut app).await;

        app.handle_logout().await;
        assert_eq!(app.route, Route::Login);

        app.session
            .login(Credentials::new("second@example.com", "pw"))
            .await;
        app.navigate(Route::Aliases);
        settle(&mut app).await;

        assert_eq!(data.alias_fetches(), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_message_is_displayed() {
        let mut app = make_app(Arc::new(MockAliasData::failing("Invalid token")));

        app.session
            .login(Credentials::new("user@example.com", "pw"))
            .await;
        app.navigate(Route::Aliases);
        settle(&mut app).await;

        assert_eq!(
            app.alias_screen.vm.list_view(),
            crate::application::view_models::AliasListView::Failed("Invalid token")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_marker_expires_after_two_seconds() {
        let mut app = make_app(Arc::new(MockAliasData::new(vec![])));

        let seq = app.alias_screen.vm.mark_copied("a@x.com");
        app.schedule_copy_clear(seq);

        tokio::time::advance(Duration::from_millis(1900)).await;
        tokio::task::yield_now().await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }
        assert!(app.alias_screen.vm.is_copied("a@x.com"));

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }
        assert!(!app.alias_screen.vm.is_copied("a@x.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_copy_timer_keeps_newer_marker() {
        let mut app = make_app(Arc::new(MockAliasData::new(vec![])));

        let first = app.alias_screen.vm.mark_copied("a@x.com");
        app.schedule_copy_clear(first);

        tokio::time::advance(Duration::from_millis(1500)).await;
        let second = app.alias_screen.vm.mark_copied("b@x.com");
        app.schedule_copy_clear(second);

        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }

        // First timer has fired, second has not; the newer marker survives.
        assert!(app.alias_screen.vm.is_copied("b@x.com"));
    }

    #[tokio::test]
    async fn test_stored_session_skips_login() {
        let token = SessionToken::new("stored-token").unwrap();
        let storage = Arc::new(MockTokenStorage::with_token(token));
        let session = Arc::new(SessionStore::new(
            Arc::new(MockAuthPort::new(true)),
            storage.clone(),
        ));
        let mut app = App::new(session, Arc::new(MockAliasData::new(vec![])));

        app.session.init_from_storage().await;
        app.navigate(navigation::landing(app.session.is_authenticated()));

        assert_eq!(app.route, Route::Aliases);

        app.handle_logout().await;
        assert!(!storage.has_token().await.unwrap());
    }
}
