//! Command ingestion loop for chat bots.
//!
//! This crate bridges an external chat transport into the dedup cache and a
//! downstream command handler:
//!
//! - **Platforms**: trait-based abstraction over the outbound side of a chat
//!   transport
//! - **Commands**: usage templates with `<param>` captures and the handler
//!   trait they dispatch to
//! - **Server**: the ingestion loop itself, driving dedup checks, the
//!   periodic eviction sweep and the diagnostic tap
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::{mpsc, watch};
//! use vermeer_bot::{BotConfig, BotServer, CommandDefinition, NoOpPlatform};
//!
//! # use async_trait::async_trait;
//! # use vermeer_core::CommandInvocation;
//! # use vermeer_error::VermeerResult;
//! # struct EchoHandler;
//! # #[async_trait]
//! # impl vermeer_bot::CommandHandler for EchoHandler {
//! #     async fn handle(&self, invocation: &CommandInvocation) -> VermeerResult<String> {
//! #         Ok(invocation.raw_text().clone())
//! #     }
//! # }
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = BotServer::builder()
//!     .config(BotConfig::default())
//!     .platform(Arc::new(NoOpPlatform::new()))
//!     .command(
//!         CommandDefinition::builder().usage("echo <text>").build(),
//!         Arc::new(EchoHandler),
//!     )
//!     .build()?;
//!
//! let (tx, rx) = mpsc::channel(32);
//! let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//! drop(tx);
//! server.run(rx, shutdown_rx).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analytics;
mod command;
mod config;
mod platform;
pub mod platforms;
mod server;

pub use analytics::AnalyticsTap;
pub use command::{CommandDefinition, CommandHandler};
pub use config::BotConfig;
pub use platform::ChatPlatform;
pub use platforms::{ConsolePlatform, NoOpPlatform};
pub use server::{BotServer, BotServerBuilder};
