//! System clipboard adapter.

use arboard::Clipboard;
use tracing::{error, warn};

/// Best-effort system clipboard access.
///
/// Copy failures are logged and reported to the caller as `false`; they are
/// never surfaced as view errors.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    /// Creates the service.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Writes text to the clipboard, returning whether the write succeeded.
    pub async fn copy_text(&self, text: impl Into<String>) -> bool {
        let text = text.into();

        let result = tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut cb) => match cb.set_text(text) {
                Ok(()) => true,
                Err(e) => {
                    error!("Failed to set clipboard text: {}", e);
                    false
                }
            },
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
                false
            }
        })
        .await;

        result.unwrap_or(false)
    }
}
