//! Vermeer - Chat command bot with event deduplication
//!
//! Vermeer bridges a chat transport into registered command handlers while
//! suppressing accidental rapid double-submissions: functionally-identical
//! events arriving inside a configurable window are dropped, and a periodic
//! sweep evicts stale entries so memory does not grow unbounded.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokio::sync::{mpsc, watch};
//! use vermeer::{BotConfig, BotServer, CommandDefinition, ConsolePlatform, YearOfBirthHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = BotServer::builder()
//!         .config(BotConfig::default())
//!         .platform(Arc::new(ConsolePlatform::new()))
//!         .command(
//!             CommandDefinition::builder().usage("my yob is <year>").build(),
//!             Arc::new(YearOfBirthHandler::default()),
//!         )
//!         .build()?;
//!
//!     let (tx, rx) = mpsc::channel(32);
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     vermeer_bot::platforms::spawn_stdin_listener("console-user", "console", tx);
//!     server.run(rx, shutdown_rx).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vermeer is organized as a workspace with focused crates:
//!
//! - `vermeer_core` - Core data types (EventRecord, Fingerprint, etc.)
//! - `vermeer_error` - Error types
//! - `vermeer_dedup` - Dedup store and eviction sweep
//! - `vermeer_bot` - Ingestion loop and chat platform abstraction
//!
//! This crate (`vermeer`) re-exports everything for convenience and ships
//! the demo binary.

#![warn(missing_docs)]

mod yob;

pub use vermeer_bot::{
    AnalyticsTap, BotConfig, BotServer, BotServerBuilder, ChatPlatform, CommandDefinition,
    CommandHandler, ConsolePlatform, NoOpPlatform,
};
pub use vermeer_core::{CommandEvent, CommandInvocation, EventRecord, Fingerprint, telemetry};
pub use vermeer_dedup::{DedupConfig, DedupStore};
pub use vermeer_error::{
    CommandError, ConfigError, PlatformError, VermeerError, VermeerErrorKind, VermeerResult,
};
pub use yob::YearOfBirthHandler;
