//! No-op platform implementation for servers that don't need a transport.

use crate::ChatPlatform;
use async_trait::async_trait;
use tracing::debug;
use vermeer_error::VermeerResult;

/// Platform implementation that does nothing.
///
/// Used in tests and for dry runs where replies should be swallowed rather
/// than delivered.
#[derive(Debug, Clone, Default)]
pub struct NoOpPlatform;

impl NoOpPlatform {
    /// Create a new no-op platform.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatPlatform for NoOpPlatform {
    async fn send_message(&self, channel_id: &str, text: &str) -> VermeerResult<()> {
        debug!(
            channel_id,
            text_len = text.len(),
            "NoOpPlatform: send_message() called (no action taken)"
        );
        Ok(())
    }

    async fn verify_connection(&self) -> VermeerResult<()> {
        debug!("NoOpPlatform: verify_connection() called (always succeeds)");
        Ok(())
    }

    fn platform_name(&self) -> &str {
        "noop"
    }
}
