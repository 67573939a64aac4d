//! Vermeer demo binary.
//!
//! Runs the bot server against a console transport: stdin lines become
//! command invocations and replies print to stdout. The only registered
//! command is the `my yob is <year>` demonstration handler.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vermeer::{
    BotConfig, BotServer, CommandDefinition, ConsolePlatform, YearOfBirthHandler, telemetry,
};
use vermeer_bot::platforms::spawn_stdin_listener;

/// Command-line arguments for the vermeer bot.
#[derive(Parser, Debug)]
#[command(name = "vermeer")]
#[command(about = "Vermeer - chat command bot with event deduplication")]
#[command(version)]
struct Args {
    /// Path to bot configuration file
    #[arg(short, long, default_value = "vermeer.toml")]
    config: PathBuf,

    /// Actor id attributed to console input
    #[arg(long, env = "VERMEER_ACTOR", default_value = "console-user")]
    actor: String,

    /// Channel id attributed to console input
    #[arg(long, env = "VERMEER_CHANNEL", default_value = "console")]
    channel: String,

    /// Export spans through the OpenTelemetry stdout pipeline
    #[arg(long)]
    telemetry: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; variables already in the environment win.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    if args.telemetry {
        telemetry::init_telemetry()?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    info!("Starting Vermeer");
    info!(config_file = ?args.config, "Loading configuration");

    let config = if args.config.exists() {
        BotConfig::from_file(&args.config)?
    } else {
        warn!(config_file = ?args.config, "Config file not found, using defaults");
        BotConfig::default()
    };

    let server = BotServer::builder()
        .config(config.clone())
        .platform(Arc::new(ConsolePlatform::new()))
        .command(
            CommandDefinition::builder()
                .usage("my yob is <year>")
                .description("yob calculator")
                .examples(vec!["my yob is 2020".to_string()])
                .build(),
            Arc::new(YearOfBirthHandler::default()),
        )
        .build()?;

    let (tx, rx) = mpsc::channel(*config.invocation_capacity());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let listener = spawn_stdin_listener(args.actor, args.channel, tx);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, stopping gracefully...");
            let _ = shutdown_tx.send(true);
        }
    });

    info!("Vermeer running. Press CTRL+C to shutdown.");

    let result = server.run(rx, shutdown_rx).await;

    // The listener may still be blocked on a read; it is done either way.
    listener.abort();
    if let Ok(Err(e)) = listener.await {
        return Err(e.into());
    }

    result?;

    if args.telemetry {
        telemetry::shutdown_telemetry();
    }

    info!("Vermeer stopped");
    Ok(())
}
