//! Alias list view-model.

use crate::domain::entities::{Alias, AliasId, SessionToken};
use crate::domain::errors::FetchError;

use super::{FetchState, FetchTicket};

/// Render states of the alias list.
///
/// An empty collection and an empty filter result are distinct so the screen
/// can tell "no aliases yet" from "no match for the current search".
#[derive(Debug, PartialEq, Eq)]
pub enum AliasListView<'a> {
    /// Fetch in flight (or not yet issued).
    Loading,
    /// Fetch failed with a display message.
    Failed(&'a str),
    /// The account has no aliases at all.
    Empty,
    /// Aliases exist but none matches the current query.
    NoMatches,
    /// Visible aliases, in backend order.
    Aliases(Vec<&'a Alias>),
}

/// State and behavior backing the alias list screen.
///
/// Owns the fetched collection plus the screen-local transient state: the
/// search query, the at-most-one expanded alias, and the copy-confirmation
/// marker. Fetches are identity-keyed by the session token; a new activation
/// re-fetches only when the token changed, a fetch failed, or nothing was
/// fetched yet.
pub struct AliasViewModel {
    state: FetchState<Vec<Alias>>,
    fetched_for: Option<SessionToken>,
    epoch: u64,
    query: String,
    expanded: Option<AliasId>,
    copied: Option<String>,
    copy_seq: u64,
}

impl AliasViewModel {
    /// Creates an idle view-model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            fetched_for: None,
            epoch: 0,
            query: String::new(),
            expanded: None,
            copied: None,
            copy_seq: 0,
        }
    }

    /// Handles the view becoming active for the given session.
    ///
    /// Returns a ticket when a fetch should be issued. While a fetch for the
    /// same session is pending, or data for it is already loaded, no ticket
    /// is produced, so repeated activations never duplicate requests.
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

    /// Applies a completed fetch.
    ///
    /// A result whose epoch does not match the current one belongs to an
    /// abandoned activation and is dropped.
    pub fn apply_fetch(&mut self, epoch: u64, result: Result<Vec<Alias>, FetchError>) {
        if epoch != self.epoch {
            return;
        }

        match result {
            Ok(aliases) => {
                self.expanded = None;
                self.state = FetchState::Loaded(aliases);
            }
            Err(e) => {
                self.state = FetchState::Failed(e.message().to_string());
            }
        }
    }

    /// Discards all state, including any pending fetch. Used on logout.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = FetchState::Idle;
        self.fetched_for = None;
        self.query.clear();
        self.expanded = None;
        self.copied = None;
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Updates the live prefix filter. Never triggers a re-fetch.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Returns the current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Returns the aliases visible under the current query, order preserved.
    #[must_use]
    pub fn visible(&self) -> Vec<&Alias> {
        match &self.state {
            FetchState::Loaded(aliases) => aliases
                .iter()
                .filter(|alias| alias.matches_prefix(&self.query))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the current render state of the list.
    #[must_use]
    pub fn list_view(&self) -> AliasListView<'_> {
        match &self.state {
            FetchState::Idle | FetchState::Loading => AliasListView::Loading,
            FetchState::Failed(message) => AliasListView::Failed(message),
            FetchState::Loaded(aliases) => {
                if aliases.is_empty() {
                    return AliasListView::Empty;
                }

                let visible = self.visible();
                if visible.is_empty() {
                    AliasListView::NoMatches
                } else {
                    AliasListView::Aliases(visible)
                }
            }
        }
    }

    /// Toggles expansion of an alias row.
    ///
    /// At most one alias is expanded; toggling the expanded one collapses
    /// it, toggling another moves the expansion.
    pub fn toggle_expand(&mut self, id: AliasId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    /// Returns the currently expanded alias id.
    #[must_use]
    pub const fn expanded(&self) -> Option<AliasId> {
        self.expanded
    }

    /// Marks an address as just copied and returns the marker's sequence
    /// number for the deferred clear.
    pub fn mark_copied(&mut self, address: impl Into<String>) -> u64 {
        self.copy_seq += 1;
        self.copied = Some(address.into());
        self.copy_seq
    }

    /// Clears the copy marker, unless a later copy superseded it.
    pub fn clear_copied(&mut self, seq: u64) {
        if seq == self.copy_seq {
            self.copied = None;
        }
    }

    /// Returns whether the address carries the "just copied" marker.
    #[must_use]
    pub fn is_copied(&self, address: &str) -> bool {
        self.copied.as_deref() == Some(address)
    }
}

impl Default for AliasViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AliasStatus;
    use test_case::test_case;

    fn alias(id: i64, address: &str) -> Alias {
        Alias {
            id: AliasId(id),
            address: address.to_string(),
            forwarding_addresses: vec![],
            status: AliasStatus::Active,
        }
    }

    fn token(value: &str) -> SessionToken {
        SessionToken::new(value).unwrap()
    }

    fn loaded(aliases: Vec<Alias>) -> AliasViewModel {
        let mut vm = AliasViewModel::new();
        let ticket = vm.activate(&token("t1")).unwrap();
        vm.apply_fetch(ticket.epoch, Ok(aliases));
        vm
    }

    #[test]
    fn test_activation_issues_one_fetch() {
        let mut vm = AliasViewModel::new();
        let t = token("t1");

        assert!(vm.activate(&t).is_some());
        assert!(vm.is_loading());
        assert!(vm.activate(&t).is_none());
    }

    #[test]
    fn test_no_refetch_for_same_session_after_load() {
        let mut vm = AliasViewModel::new();
        let t = token("t1");

        let ticket = vm.activate(&t).unwrap();
        vm.apply_fetch(ticket.epoch, Ok(vec![]));

        assert!(vm.activate(&t).is_none());
    }

    #[test]
    fn test_refetch_when_session_changes() {
        let mut vm = AliasViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        vm.apply_fetch(ticket.epoch, Ok(vec![]));

        assert!(vm.activate(&token("t2")).is_some());
    }

    #[test]
    fn test_refetch_after_failure() {
        let mut vm = AliasViewModel::new();
        let t = token("t1");

        let ticket = vm.activate(&t).unwrap();
        vm.apply_fetch(ticket.epoch, Err(FetchError::new("boom")));

        assert!(vm.activate(&t).is_some());
    }

    #[test]
    fn test_stale_fetch_result_is_dropped() {
        let mut vm = AliasViewModel::new();

        let stale = vm.activate(&token("t1")).unwrap();
        let fresh = vm.activate(&token("t2")).unwrap();

        vm.apply_fetch(stale.epoch, Ok(vec![alias(9, "stale@x.com")]));
        assert!(vm.is_loading());

        vm.apply_fetch(fresh.epoch, Ok(vec![alias(1, "fresh@x.com")]));
        assert_eq!(vm.visible().len(), 1);
        assert_eq!(vm.visible()[0].address, "fresh@x.com");
    }

    #[test]
    fn test_result_after_reset_is_dropped() {
        let mut vm = AliasViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        vm.reset();
        vm.apply_fetch(ticket.epoch, Ok(vec![alias(1, "a@x.com")]));

        assert_eq!(vm.list_view(), AliasListView::Loading);
    }

    #[test]
    fn test_error_message_is_exposed() {
        let mut vm = AliasViewModel::new();

        let ticket = vm.activate(&token("t1")).unwrap();
        vm.apply_fetch(ticket.epoch, Err(FetchError::new("Invalid token")));

        assert_eq!(vm.list_view(), AliasListView::Failed("Invalid token"));
    }

    #[test_case("a", &["a@x.com", "ab@x.com"]; "prefix a")]
    #[test_case("ab", &["ab@x.com"]; "prefix ab")]
    #[test_case("A", &["a@x.com", "ab@x.com"]; "uppercase query")]
    #[test_case("", &["a@x.com", "ab@x.com", "b@x.com"]; "empty query is identity")]
    #[test_case("z", &[]; "no match")]
    fn test_prefix_filter(query: &str, expected: &[&str]) {
        let mut vm = loaded(vec![
            alias(1, "a@x.com"),
            alias(2, "ab@x.com"),
            alias(3, "b@x.com"),
        ]);

        vm.set_search_query(query);

        let visible: Vec<&str> = vm.visible().iter().map(|a| a.address.as_str()).collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_filter_preserves_order_and_ids() {
        let mut vm = loaded(vec![
            alias(1, "a@x.com"),
            alias(2, "ab@x.com"),
            alias(3, "b@x.com"),
        ]);

        vm.set_search_query("a");

        let ids: Vec<i64> = vm.visible().iter().map(|a| a.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_collection_vs_no_matches() {
        let empty = loaded(vec![]);
        assert_eq!(empty.list_view(), AliasListView::Empty);

        let mut populated = loaded(vec![alias(1, "a@x.com")]);
        populated.set_search_query("zzz");
        assert_eq!(populated.list_view(), AliasListView::NoMatches);
    }

    #[test]
    fn test_at_most_one_expanded() {
        let mut vm = loaded(vec![alias(1, "a@x.com"), alias(2, "b@x.com")]);

        vm.toggle_expand(AliasId(1));
        assert_eq!(vm.expanded(), Some(AliasId(1)));

        vm.toggle_expand(AliasId(2));
        assert_eq!(vm.expanded(), Some(AliasId(2)));

        vm.toggle_expand(AliasId(2));
        assert_eq!(vm.expanded(), None);
    }

    #[test]
    fn test_copy_marker_set_and_cleared() {
        let mut vm = AliasViewModel::new();

        let seq = vm.mark_copied("a@x.com");
        assert!(vm.is_copied("a@x.com"));

        vm.clear_copied(seq);
        assert!(!vm.is_copied("a@x.com"));
    }

    #[test]
    fn test_stale_clear_does_not_remove_newer_marker() {
        let mut vm = AliasViewModel::new();

        let first = vm.mark_copied("a@x.com");
        let _second = vm.mark_copied("b@x.com");

        vm.clear_copied(first);
        assert!(vm.is_copied("b@x.com"));
    }

    #[test]
    fn test_repeat_copy_resets_window() {
        let mut vm = AliasViewModel::new();

        let first = vm.mark_copied("a@x.com");
        let second = vm.mark_copied("a@x.com");

        vm.clear_copied(first);
        assert!(vm.is_copied("a@x.com"));

        vm.clear_copied(second);
        assert!(!vm.is_copied("a@x.com"));
    }

    #[test]
    fn test_new_data_collapses_expansion() {
        let mut vm = loaded(vec![alias(1, "a@x.com")]);
        vm.toggle_expand(AliasId(1));

        let ticket = vm.activate(&token("t2")).unwrap();
        vm.apply_fetch(ticket.epoch, Ok(vec![alias(2, "b@x.com")]));

        assert_eq!(vm.expanded(), None);
    }
}
