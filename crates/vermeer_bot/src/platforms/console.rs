//! Console platform for local development.

use crate::ChatPlatform;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use vermeer_core::CommandInvocation;
use vermeer_error::{PlatformError, VermeerResult};

/// Platform that prints replies to stdout.
///
/// Stands in for a real chat transport during local development; pair it
/// with [`spawn_stdin_listener`] for a full console round-trip.
#[derive(Debug, Clone, Default)]
pub struct ConsolePlatform;

impl ConsolePlatform {
    /// Create a new console platform.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatPlatform for ConsolePlatform {
    async fn send_message(&self, channel_id: &str, text: &str) -> VermeerResult<()> {
        println!("[{channel_id}] {text}");
        Ok(())
    }

    async fn verify_connection(&self) -> VermeerResult<()> {
        debug!("ConsolePlatform: verify_connection() called (always succeeds)");
        Ok(())
    }

    fn platform_name(&self) -> &str {
        "console"
    }
}

/// Spawn a task that turns stdin lines into command invocations.
///
/// Each line becomes one [`CommandInvocation`] attributed to the given
/// actor and context. The task ends on EOF or when the receiving side of
/// the channel closes; a read failure is a transport-level error and is
/// returned from the task.
pub fn spawn_stdin_listener(
    actor_id: impl Into<String>,
    context_id: impl Into<String>,
    tx: mpsc::Sender<CommandInvocation>,
) -> JoinHandle<VermeerResult<()>> {
    let actor_id = actor_id.into();
    let context_id = context_id.into();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = lines
                .next_line()
                .await
                .map_err(|e| PlatformError::new(format!("stdin read failed: {e}")))?;

            let Some(line) = line else {
                info!("stdin closed, listener stopping");
                return Ok(());
            };

            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let invocation = CommandInvocation::builder()
                .actor_id(actor_id.clone())
                .context_id(context_id.clone())
                .raw_text(text)
                .build();

            if tx.send(invocation).await.is_err() {
                info!("Invocation channel closed, listener stopping");
                return Ok(());
            }
        }
    })
}
