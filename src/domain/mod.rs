//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Account, Alias, AliasId, AliasStatus, ForwardingAddress, SessionToken};
pub use errors::{AuthError, FetchError};
pub use ports::{AliasDataPort, AuthPort, Credentials, TokenStoragePort};
