//! Diagnostic tap for command telemetry.

use tokio::sync::mpsc;
use tracing::{debug, info};
use vermeer_core::CommandEvent;

/// Bounded diagnostic stream of command telemetry.
///
/// The tap is pure observability: an independent consumer task logs each
/// [`CommandEvent`], with no coupling to dedup logic. The queue is bounded
/// and the publisher drops the event when it is full, so a slow consumer
/// can never stall the command path. The consumer exits once every
/// publisher handle is dropped.
#[derive(Debug, Clone)]
pub struct AnalyticsTap {
    tx: mpsc::Sender<CommandEvent>,
}

impl AnalyticsTap {
    /// Spawn the consumer task and return the publisher handle.
    pub fn spawn(capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<CommandEvent>(capacity);

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                info!(
                    timestamp = %event.timestamp(),
                    command = %event.command(),
                    parameters = ?event.parameters(),
                    raw_text = %event.raw_text(),
                    "Command event"
                );
            }
            debug!("Analytics tap drained, consumer stopping");
        });

        Self { tx }
    }

    /// Publish a telemetry record.
    ///
    /// Dropped (with a debug log) when the queue is full or the consumer
    /// is gone.
    pub fn publish(&self, event: CommandEvent) {
        if let Err(e) = self.tx.try_send(event) {
            debug!(reason = %e, "Dropping command event");
        }
    }
}
