//! Bot server configuration types and loading.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typed_builder::TypedBuilder;
use vermeer_dedup::DedupConfig;
use vermeer_error::{ConfigError, VermeerResult};

/// Configuration for the bot server.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct BotConfig {
    /// Dedup cache and eviction settings.
    #[builder(default)]
    #[serde(default)]
    dedup: DedupConfig,

    /// Capacity of the diagnostic telemetry queue.
    #[builder(default = 64)]
    #[serde(default = "default_analytics_capacity")]
    analytics_capacity: usize,

    /// Capacity of the inbound invocation channel.
    #[builder(default = 32)]
    #[serde(default = "default_invocation_capacity")]
    invocation_capacity: usize,
}

fn default_analytics_capacity() -> usize {
    64
}

fn default_invocation_capacity() -> usize {
    32
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            dedup: DedupConfig::default(),
            analytics_capacity: default_analytics_capacity(),
            invocation_capacity: default_invocation_capacity(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> VermeerResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading bot config from file");

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("{}: {e}", path.display())))?;

        let config: BotConfig = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("{}: {e}", path.display())))?;

        Ok(config)
    }
}
