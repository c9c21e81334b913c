//! Application layer with session state, navigation, and view-models.

/// Route resolution and the navigation guard.
pub mod navigation;
/// Session state management.
pub mod session;
/// Screen view-models.
pub mod view_models;

pub use navigation::Route;
pub use session::SessionStore;
pub use view_models::{AccountViewModel, AliasListView, AliasViewModel, FetchState, FetchTicket};
