//! Chat platform trait.

use async_trait::async_trait;
use vermeer_error::VermeerResult;

/// Trait for the outbound side of a chat transport.
///
/// The ingestion loop invokes [`ChatPlatform::send_message`] at most once
/// per non-duplicate event. Credentials and the inbound listen loop belong
/// to the transport itself and are not modeled here.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Send a message to a channel.
    ///
    /// # Arguments
    ///
    /// * `channel_id` - Channel to deliver the message to
    /// * `text` - Message payload
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The transport rejects the message
    /// - The channel does not exist
    async fn send_message(&self, channel_id: &str, text: &str) -> VermeerResult<()>;

    /// Verify the transport is reachable.
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be reached.
    async fn verify_connection(&self) -> VermeerResult<()>;

    /// Name of the platform implementation.
    fn platform_name(&self) -> &str;
}
