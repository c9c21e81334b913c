//! Domain error types.

mod auth_error;
mod fetch_error;

pub use auth_error::AuthError;
pub use fetch_error::FetchError;
