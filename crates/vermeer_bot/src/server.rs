//! Bot server: the command ingestion loop.

use crate::{AnalyticsTap, BotConfig, ChatPlatform, CommandDefinition, CommandHandler};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info, instrument, warn};
use vermeer_core::{CommandEvent, CommandInvocation, EventRecord};
use vermeer_dedup::DedupStore;
use vermeer_error::{ConfigError, VermeerErrorKind, VermeerResult};

struct RegisteredCommand {
    definition: CommandDefinition,
    handler: Arc<dyn CommandHandler>,
}

/// Bot server bridging a chat transport into the dedup cache and command
/// handlers.
///
/// The server owns its [`DedupStore`]; the ingestion loop and the spawned
/// eviction sweeper share it behind an `Arc`. Inbound invocations are
/// matched against registered commands, published to the diagnostic tap,
/// checked for duplicates and finally dispatched. Duplicate suppression is
/// a silent drop: no response, no error.
pub struct BotServer {
    config: BotConfig,
    store: Arc<DedupStore>,
    platform: Arc<dyn ChatPlatform>,
    commands: Vec<RegisteredCommand>,
}

impl BotServer {
    /// Create a new bot server with builder pattern.
    pub fn builder() -> BotServerBuilder {
        BotServerBuilder::default()
    }

    /// The dedup store owned by this server instance.
    pub fn store(&self) -> Arc<DedupStore> {
        Arc::clone(&self.store)
    }

    /// Run the ingestion loop until the invocation source closes or the
    /// shutdown signal fires.
    ///
    /// Concurrently with the loop, a spawned sweeper evicts stale dedup
    /// entries on the configured interval; shutdown stops the sweeper but
    /// does not interrupt an in-flight handler invocation.
    ///
    /// # Errors
    ///
    /// Returns error if the transport fails to deliver a reply.
    #[instrument(skip(self, invocations, shutdown), fields(platform = %self.platform.platform_name()))]
    pub async fn run(
        self,
        mut invocations: mpsc::Receiver<CommandInvocation>,
        mut shutdown: watch::Receiver<bool>,
    ) -> VermeerResult<()> {
        info!(commands = self.commands.len(), "Bot server started");

        let (sweep_tx, sweep_rx) = watch::channel(false);
        let sweeper = Self::spawn_eviction_sweeper(
            Arc::clone(&self.store),
            self.config.dedup().eviction_interval(),
            self.config.dedup().max_age(),
            sweep_rx,
        );
        let tap = AnalyticsTap::spawn(*self.config.analytics_capacity());

        let result = loop {
            tokio::select! {
                maybe = invocations.recv() => {
                    match maybe {
                        Some(invocation) => {
                            if let Err(e) = self.process(invocation, &tap).await {
                                break Err(e);
                            }
                        }
                        None => {
                            info!("Invocation source closed");
                            break Ok(());
                        }
                    }
                }
                _ = shutdown.changed() => {
                    info!("Shutdown signal received");
                    break Ok(());
                }
            }
        };

        // Stop the sweeper and wait for it to exit before reporting Stopped.
        let _ = sweep_tx.send(true);
        if sweeper.await.is_err() {
            error!("Eviction sweeper panicked");
        }

        info!("Bot server stopped");
        result
    }

    /// Route one invocation through matching, telemetry, dedup and dispatch.
    #[instrument(skip(self, invocation, tap), fields(actor = %invocation.actor_id(), context = %invocation.context_id()))]
    async fn process(&self, invocation: CommandInvocation, tap: &AnalyticsTap) -> VermeerResult<()> {
        let Some((command, parameters)) = self.match_command(invocation.raw_text()) else {
            debug!(text = %invocation.raw_text(), "No command matched");
            return Ok(());
        };

        let invocation = invocation.with_parameters(parameters);
        tap.publish(CommandEvent::from_invocation(command.usage(), &invocation));

        let record = EventRecord::new(
            invocation.actor_id(),
            invocation.context_id(),
            invocation.raw_text(),
        );
        if self.store.check_and_record(record, self.config.dedup().window()) {
            debug!("Duplicate invocation suppressed");
            return Ok(());
        }

        match command.handler.handle(&invocation).await {
            Ok(reply) => {
                self.platform
                    .send_message(invocation.context_id(), &reply)
                    .await?;
            }
            Err(e) => match e.kind() {
                VermeerErrorKind::Command(cmd) => {
                    warn!(error = %cmd, "Rejecting malformed command");
                    self.platform
                        .send_message(invocation.context_id(), &cmd.message)
                        .await?;
                }
                _ => {
                    error!(error = ?e, "Command handler failed");
                }
            },
        }

        Ok(())
    }

    fn match_command(&self, text: &str) -> Option<(&RegisteredCommand, HashMap<String, String>)> {
        self.commands
            .iter()
            .find_map(|command| command.definition.match_text(text).map(|params| (command, params)))
    }

    fn spawn_eviction_sweeper(
        store: Arc<DedupStore>,
        sweep_interval: Duration,
        max_age: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(sweep_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        store.evict(max_age);
                    }
                    _ = shutdown.changed() => {
                        debug!("Eviction sweeper stopping");
                        break;
                    }
                }
            }
        })
    }
}

impl RegisteredCommand {
    fn usage(&self) -> &str {
        self.definition.usage()
    }
}

/// Builder for creating bot server instances.
#[derive(Default)]
pub struct BotServerBuilder {
    config: Option<BotConfig>,
    platform: Option<Arc<dyn ChatPlatform>>,
    commands: Vec<RegisteredCommand>,
}

impl BotServerBuilder {
    /// Set server configuration.
    pub fn config(mut self, config: BotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the chat platform implementation.
    pub fn platform(mut self, platform: Arc<dyn ChatPlatform>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Register a command with its handler.
    pub fn command(mut self, definition: CommandDefinition, handler: Arc<dyn CommandHandler>) -> Self {
        self.commands.push(RegisteredCommand { definition, handler });
        self
    }

    /// Build the server.
    ///
    /// # Errors
    ///
    /// Returns error if the platform is missing.
    pub fn build(self) -> VermeerResult<BotServer> {
        let platform = self
            .platform
            .ok_or_else(|| ConfigError::new("Chat platform is required"))?;

        Ok(BotServer {
            config: self.config.unwrap_or_default(),
            store: Arc::new(DedupStore::new()),
            platform,
            commands: self.commands,
        })
    }
}
