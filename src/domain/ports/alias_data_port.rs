//! Alias service data port definition.

use async_trait::async_trait;

use crate::domain::entities::{Account, Alias, SessionToken};
use crate::domain::errors::FetchError;

/// Port for reading protected data from the alias service.
#[async_trait]
pub trait AliasDataPort: Send + Sync {
    /// Fetches the full alias collection for the session, in backend order.
    async fn fetch_aliases(&self, token: &SessionToken) -> Result<Vec<Alias>, FetchError>;

    /// Fetches the account profile for the session.
    async fn fetch_account(&self, token: &SessionToken) -> Result<Account, FetchError>;
}
