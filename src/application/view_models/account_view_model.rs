//! Account profile view-model.

use crate::domain::entities::{Account, SessionToken};
use crate::domain::errors::FetchError;

use super::{FetchState, FetchTicket};

/// State backing the account screen.
///
/// Same fetch lifecycle as the alias list - one in-flight fetch, identity
/// keyed by the session token, epoch-guarded results - with no filtering or
/// expansion behavior.
pub struct AccountViewModel {
    state: FetchState<Account>,
    fetched_for: Option<SessionToken>,
    epoch: u64,
}

impl AccountViewModel {
    /// Creates an idle view-model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            fetched_for: None,
            epoch: 0,
        }
    }

    /// Handles the view becoming active; returns a ticket when a fetch
    /// should be issued.
    pub fn activate(&mut self, token: &SessionToken) -> Option<FetchTicket> {
        let same_session = self.fetched_for.as_ref() == Some(token);

        if same_session && matches!(self.state, FetchState::Loading | FetchState::Loaded(_)) {
            return None;
        }

        self.epoch += 1;
        self.state = FetchState::Loading;
        self.fetched_for = Some(token.clone());

        Some(FetchTicket {
            token: token.clone(),
            epoch: self.epoch,
        })
    }

    /// Applies a completed fetch, dropping results from abandoned
    /// activations.
    pub fn apply_fetch(&mut self, epoch: u64, result: Result<Account, FetchError>) {
        if epoch != self.epoch {
            return;
        }

        self.state = match result {
            Ok(account) => FetchState::Loaded(account),
            Err(e) => FetchState::Failed(e.message().to_string()),
        };
    }

    /// Discards all state. Used on logout.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = FetchState::Idle;
        self.fetched_for = None;
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns the loaded account, if any.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        match &self.state {
            FetchState::Loaded(account) => Some(account),
            _ => None,
        }
    }

    /// Returns the failure message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for AccountViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> SessionToken {
        SessionToken::new(value).unwrap()
    }

    #[test]
    fn test_activation_fetches_once() {
        let mut vm = AccountViewModel::new();
        let t = token("t1");

        assert!(vm.activate(&t).is_some());
        assert!(vm.activate(&t).is_none());
    }

    #[test]
    fn test_states_are_mutually_exclusive() {
        let mut vm = AccountViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        assert!(vm.is_loading());
        assert!(vm.account().is_none());
        assert!(vm.error().is_none());

        vm.apply_fetch(ticket.epoch, Ok(Account::new("user@example.com")));
        assert!(!vm.is_loading());
        assert_eq!(vm.account().map(|a| a.email.as_str()), Some("user@example.com"));
        assert!(vm.error().is_none());
    }

    #[test]
    fn test_failure_exposes_message() {
        let mut vm = AccountViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        vm.apply_fetch(ticket.epoch, Err(FetchError::new("Invalid token")));

        assert_eq!(vm.error(), Some("Invalid token"));
        assert!(vm.account().is_none());
    }

    #[test]
    fn test_refetch_on_session_change_only() {
        let mut vm = AccountViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        vm.apply_fetch(ticket.epoch, Ok(Account::new("user@example.com")));

        assert!(vm.activate(&token("t1")).is_none());
        assert!(vm.activate(&token("t2")).is_some());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut vm = AccountViewModel::new();

        let stale = vm.activate(&token("t1")).unwrap();
        vm.reset();
        vm.apply_fetch(stale.epoch, Ok(Account::new("ghost@example.com")));

        assert!(vm.account().is_none());
    }
}
