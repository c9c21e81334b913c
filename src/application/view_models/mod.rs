//! Non-visual state and behavior backing the protected screens.

mod account_view_model;
mod alias_view_model;

pub use account_view_model::AccountViewModel;
pub use alias_view_model::{AliasListView, AliasViewModel};

use crate::domain::entities::SessionToken;

/// Lifecycle of a single per-view fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No fetch issued yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed with data.
    Loaded(T),
    /// The fetch failed with a display message.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Authorization for one fetch issued by a view-model.
///
/// The epoch ties the eventual response back to the activation that issued
/// it; a response whose epoch no longer matches the view-model is dropped.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    /// Session token to fetch with.
    pub token: SessionToken,
    /// Epoch at issue time.
    pub epoch: u64,
}
