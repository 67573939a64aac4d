//! Event deduplication with window-based expiry.
//!
//! This crate provides the dedup cache for inbound bot commands: repeat
//! events with the same fingerprint are suppressed inside a configurable
//! window, and a periodic sweep evicts stale entries so memory does not
//! grow unbounded.

#![warn(missing_docs)]

mod config;
mod store;

pub use config::DedupConfig;
pub use store::DedupStore;
