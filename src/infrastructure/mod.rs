//! Infrastructure layer with external service adapters.

/// Alias service API client.
pub mod api;
/// System clipboard access.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::{ApiClient, DEFAULT_API_BASE};
pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, LogLevel};
pub use storage::KeyringTokenStorage;
