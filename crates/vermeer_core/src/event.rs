//! Observed event types used for deduplication.

use derive_getters::Getters;
use std::time::Instant;

/// Derived key identifying a semantically-equivalent event.
///
/// The key is the plain concatenation of user id, channel id and payload
/// text. Concatenation is ambiguous at field boundaries: `("ab", "c")` and
/// `("a", "bc")` produce the same fingerprint. This is an accepted
/// approximation for suppressing accidental double-submissions; switching
/// to a delimited or hashed key would change observable behavior at those
/// boundaries.
///
/// # Examples
///
/// ```
/// use vermeer_core::Fingerprint;
///
/// let fp = Fingerprint::from_parts("u1", "c1", "hi");
/// assert_eq!(fp.to_string(), "u1c1hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from its constituent parts.
    pub fn from_parts(user_id: &str, channel_id: &str, text: &str) -> Self {
        let mut key = String::with_capacity(user_id.len() + channel_id.len() + text.len());
        key.push_str(user_id);
        key.push_str(channel_id);
        key.push_str(text);
        Self(key)
    }
}

impl From<&EventRecord> for Fingerprint {
    fn from(record: &EventRecord) -> Self {
        Self::from_parts(record.user_id(), record.channel_id(), record.text())
    }
}

/// One observed event, keyed by originating user, channel and payload text.
///
/// The timestamp is monotonic and marks when the event was recorded; the
/// dedup window and eviction age are both measured against it.
#[derive(Debug, Clone, Getters)]
pub struct EventRecord {
    /// Identifier of the originating actor.
    user_id: String,
    /// Identifier of the originating context/channel.
    channel_id: String,
    /// Raw payload string used for fingerprinting.
    text: String,
    /// When the event was recorded.
    timestamp: Instant,
}

impl EventRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::recorded_at(user_id, channel_id, text, Instant::now())
    }

    /// Create a record with an explicit timestamp.
    pub fn recorded_at(
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        text: impl Into<String>,
        timestamp: Instant,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Compute this record's dedup fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from(self)
    }

    /// Return the record restamped at the given instant.
    pub fn restamped(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_concatenates_parts() {
        let record = EventRecord::new("u1", "c1", "my yob is 2020");
        assert_eq!(record.fingerprint().to_string(), "u1c1my yob is 2020");
    }

    #[test]
    fn fingerprint_boundary_ambiguity_is_retained() {
        // Documented limitation of concatenation keys.
        let a = Fingerprint::from_parts("ab", "c", "x");
        let b = Fingerprint::from_parts("a", "bc", "x");
        assert_eq!(a, b);
    }
}
