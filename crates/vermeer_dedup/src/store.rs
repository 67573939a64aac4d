//! Dedup store implementation.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use vermeer_core::{EventRecord, Fingerprint};

/// Store of recently-seen event fingerprints.
///
/// Holds at most one [`EventRecord`] per [`Fingerprint`], last-seen wins.
/// The store is owned by the service instance and shared (via `Arc`)
/// between the ingestion path and the eviction sweep; all access is
/// serialized through an internal lock, and check-and-record for a given
/// fingerprint is atomic as a unit. None of the operations await, so the
/// lock is never held across a suspension point.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use vermeer_core::EventRecord;
/// use vermeer_dedup::DedupStore;
///
/// let store = DedupStore::new();
/// let window = Duration::from_secs(30);
///
/// let first = EventRecord::new("u1", "c1", "my yob is 2020");
/// assert!(!store.check_and_record(first, window));
///
/// let repeat = EventRecord::new("u1", "c1", "my yob is 2020");
/// assert!(store.check_and_record(repeat, window));
/// ```
#[derive(Debug, Default)]
pub struct DedupStore {
    entries: Mutex<HashMap<Fingerprint, EventRecord>>,
}

impl DedupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a record is a duplicate and record it if not.
    ///
    /// Returns `true` when an entry with the same fingerprint was seen less
    /// than `window` ago; the stored timestamp is left untouched so the
    /// window is measured from the first occurrence of a burst. Otherwise
    /// the record is inserted (overwriting any expired entry, timestamp
    /// refreshed to now) and `false` is returned.
    ///
    /// A zero window disables suppression. Absence of a prior entry is a
    /// normal, non-error state.
    pub fn check_and_record(&self, record: EventRecord, window: Duration) -> bool {
        self.check_and_record_at(record, window, Instant::now())
    }

    /// [`Self::check_and_record`] against an explicit notion of now.
    pub fn check_and_record_at(&self, record: EventRecord, window: Duration, now: Instant) -> bool {
        let fingerprint = record.fingerprint();
        let mut entries = self.entries.lock().expect("dedup store lock poisoned");

        if let Some(existing) = entries.get(&fingerprint)
            && now.saturating_duration_since(*existing.timestamp()) < window
        {
            tracing::debug!(%fingerprint, "Suppressing duplicate event");
            return true;
        }

        entries.insert(fingerprint, record.restamped(now));
        false
    }

    /// Remove every entry strictly older than `max_age`.
    ///
    /// Entries exactly at the boundary are retained. Returns the number of
    /// entries removed. Idempotent: a second sweep with no intervening
    /// events removes nothing.
    pub fn evict(&self, max_age: Duration) -> usize {
        self.evict_at(max_age, Instant::now())
    }

    /// [`Self::evict`] against an explicit notion of now.
    pub fn evict_at(&self, max_age: Duration, now: Instant) -> usize {
        let mut entries = self.entries.lock().expect("dedup store lock poisoned");
        let before = entries.len();

        entries.retain(|_, record| now.saturating_duration_since(*record.timestamp()) <= max_age);

        let removed = before - entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = entries.len(), "Evicted stale dedup entries");
        }
        removed
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("dedup store lock poisoned").len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
