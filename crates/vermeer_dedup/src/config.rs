//! Deduplication configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Configuration for the dedup cache and its eviction sweep.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct DedupConfig {
    /// Duplicate-suppression window in seconds. Zero disables suppression.
    #[builder(default = 30)]
    #[serde(default = "default_window_seconds")]
    window_seconds: u64,

    /// Seconds between eviction sweeps.
    #[builder(default = 600)]
    #[serde(default = "default_eviction_interval_seconds")]
    eviction_interval_seconds: u64,

    /// Maximum age in seconds an entry may reach before removal.
    #[builder(default = 3600)]
    #[serde(default = "default_max_age_seconds")]
    max_age_seconds: u64,
}

fn default_window_seconds() -> u64 {
    30
}

fn default_eviction_interval_seconds() -> u64 {
    600 // 10 minutes
}

fn default_max_age_seconds() -> u64 {
    3600 // 1 hour
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            eviction_interval_seconds: default_eviction_interval_seconds(),
            max_age_seconds: default_max_age_seconds(),
        }
    }
}

impl DedupConfig {
    /// Duplicate-suppression window as a duration.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    /// Interval between eviction sweeps as a duration.
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_seconds)
    }

    /// Maximum entry age as a duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_use() {
        let config = DedupConfig::default();
        assert_eq!(config.window(), Duration::from_secs(30));
        assert_eq!(config.eviction_interval(), Duration::from_secs(600));
        assert_eq!(config.max_age(), Duration::from_secs(3600));
    }

    #[test]
    fn builder_overrides() {
        let config = DedupConfig::builder().window_seconds(5).build();
        assert_eq!(config.window(), Duration::from_secs(5));
        assert_eq!(config.eviction_interval(), Duration::from_secs(600));
    }
}
