//! Tests for the bot server ingestion loop.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, mpsc, watch};
use vermeer_bot::{
    BotConfig, BotServer, ChatPlatform, CommandDefinition, CommandHandler,
};
use vermeer_core::CommandInvocation;
use vermeer_dedup::DedupConfig;
use vermeer_error::{CommandError, VermeerResult};

/// Platform double that records every sent message.
#[derive(Debug, Clone, Default)]
struct RecordingPlatform {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingPlatform {
    async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn send_message(&self, channel_id: &str, text: &str) -> VermeerResult<()> {
        self.sent
            .lock()
            .await
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn verify_connection(&self) -> VermeerResult<()> {
        Ok(())
    }

    fn platform_name(&self) -> &str {
        "recording"
    }
}

/// Handler that counts invocations and echoes the year parameter.
#[derive(Default)]
struct CountingHandler {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CommandHandler for CountingHandler {
    async fn handle(&self, invocation: &CommandInvocation) -> VermeerResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let year = invocation
            .param("year")
            .ok_or_else(|| CommandError::new("missing parameter `year`"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| CommandError::new(format!("`{year}` is not a year")))?;
        Ok(format!("yob is {year}"))
    }
}

fn yob_definition() -> CommandDefinition {
    CommandDefinition::builder()
        .usage("my yob is <year>")
        .description("yob calculator")
        .build()
}

fn config_with_window(window_seconds: u64) -> BotConfig {
    BotConfig::builder()
        .dedup(DedupConfig::builder().window_seconds(window_seconds).build())
        .build()
}

fn invocation(actor: &str, context: &str, text: &str) -> CommandInvocation {
    CommandInvocation::builder()
        .actor_id(actor)
        .context_id(context)
        .raw_text(text)
        .build()
}

#[tokio::test]
async fn duplicate_invocation_is_silently_dropped() {
    let platform = RecordingPlatform::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let handler = CountingHandler {
        calls: Arc::clone(&calls),
    };

    let server = BotServer::builder()
        .config(config_with_window(30))
        .platform(Arc::new(platform.clone()))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    drop(tx);

    server.run(rx, shutdown_rx).await.expect("run should succeed");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let sent = platform.sent().await;
    assert_eq!(sent, vec![("c1".to_string(), "yob is 2020".to_string())]);
}

#[tokio::test]
async fn repeat_after_window_is_handled_again() {
    let platform = RecordingPlatform::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let handler = CountingHandler {
        calls: Arc::clone(&calls),
    };

    let server = BotServer::builder()
        .config(config_with_window(1))
        .platform(Arc::new(platform.clone()))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let run = tokio::spawn(server.run(rx, shutdown_rx));

    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1200)).await;
    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    drop(tx);

    run.await.unwrap().expect("run should succeed");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn different_channels_are_not_duplicates() {
    let platform = RecordingPlatform::default();
    let handler = CountingHandler::default();

    let server = BotServer::builder()
        .config(config_with_window(30))
        .platform(Arc::new(platform.clone()))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    tx.send(invocation("u1", "c2", "my yob is 2020")).await.unwrap();
    drop(tx);

    server.run(rx, shutdown_rx).await.expect("run should succeed");

    let sent = platform.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "c1");
    assert_eq!(sent[1].0, "c2");
}

#[tokio::test]
async fn malformed_parameter_is_reported_not_fatal() {
    let platform = RecordingPlatform::default();
    let handler = CountingHandler::default();

    let server = BotServer::builder()
        .config(config_with_window(30))
        .platform(Arc::new(platform.clone()))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    tx.send(invocation("u1", "c1", "my yob is nineteen")).await.unwrap();
    tx.send(invocation("u1", "c1", "my yob is 1990")).await.unwrap();
    drop(tx);

    server.run(rx, shutdown_rx).await.expect("run should survive bad input");

    let sent = platform.sent().await;
    assert_eq!(sent.len(), 2);
    assert!(sent[0].1.contains("not a year"));
    assert_eq!(sent[1].1, "yob is 1990");
}

#[tokio::test]
async fn unmatched_text_is_ignored() {
    let platform = RecordingPlatform::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let handler = CountingHandler {
        calls: Arc::clone(&calls),
    };

    let server = BotServer::builder()
        .config(BotConfig::default())
        .platform(Arc::new(platform.clone()))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    tx.send(invocation("u1", "c1", "what is the weather")).await.unwrap();
    drop(tx);

    server.run(rx, shutdown_rx).await.expect("run should succeed");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(platform.sent().await.is_empty());
}

#[tokio::test]
async fn shutdown_signal_stops_the_loop() {
    let platform = RecordingPlatform::default();
    let handler = CountingHandler::default();

    let server = BotServer::builder()
        .config(BotConfig::default())
        .platform(Arc::new(platform))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");

    let (tx, rx) = mpsc::channel(8);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let run = tokio::spawn(server.run(rx, shutdown_rx));

    shutdown_tx.send(true).expect("receiver should be alive");
    run.await.unwrap().expect("run should stop cleanly");

    // The channel stays open; shutdown alone ended the loop.
    drop(tx);
}

#[tokio::test]
async fn eviction_sweeper_clears_stale_entries() {
    let platform = RecordingPlatform::default();
    let handler = CountingHandler::default();

    let config = BotConfig::builder()
        .dedup(
            DedupConfig::builder()
                .window_seconds(0)
                .eviction_interval_seconds(1)
                .max_age_seconds(0)
                .build(),
        )
        .build();

    let server = BotServer::builder()
        .config(config)
        .platform(Arc::new(platform))
        .command(yob_definition(), Arc::new(handler))
        .build()
        .expect("server should build");
    let store = server.store();

    let (tx, rx) = mpsc::channel(8);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let run = tokio::spawn(server.run(rx, shutdown_rx));

    tx.send(invocation("u1", "c1", "my yob is 2020")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert!(store.is_empty(), "sweeper should have evicted the entry");

    shutdown_tx.send(true).expect("receiver should be alive");
    run.await.unwrap().expect("run should stop cleanly");
    drop(tx);
}
