//! Scenario and stress tests for the dedup store.

use std::sync::Arc;
use std::time::{Duration, Instant};
use vermeer_core::EventRecord;
use vermeer_dedup::DedupStore;

fn event(user: &str, channel: &str, text: &str, at: Instant) -> EventRecord {
    EventRecord::recorded_at(user, channel, text, at)
}

#[test]
fn repeat_within_window_is_suppressed() {
    let store = DedupStore::new();
    let window = Duration::from_secs(30);
    let t0 = Instant::now();

    // Event A at t=0: not duplicate, handler would fire.
    assert!(!store.check_and_record_at(event("u1", "c1", "hi", t0), window, t0));

    // Event A again at t=10s: duplicate.
    let t1 = t0 + Duration::from_secs(10);
    assert!(store.check_and_record_at(event("u1", "c1", "hi", t1), window, t1));

    // Event A again at t=31s: window (measured from t=0) has passed.
    let t2 = t0 + Duration::from_secs(31);
    assert!(!store.check_and_record_at(event("u1", "c1", "hi", t2), window, t2));
}

#[test]
fn eviction_respects_max_age() {
    let store = DedupStore::new();
    let t0 = Instant::now();
    let max_age = Duration::from_secs(3600);

    store.check_and_record_at(event("u1", "c1", "ping", t0), Duration::from_secs(30), t0);

    // 59 minutes in: retained.
    assert_eq!(store.evict_at(max_age, t0 + Duration::from_secs(59 * 60)), 0);
    assert_eq!(store.len(), 1);

    // 61 minutes in: removed.
    assert_eq!(store.evict_at(max_age, t0 + Duration::from_secs(61 * 60)), 1);
    assert!(store.is_empty());
}

#[test]
fn different_channels_never_collide() {
    let store = DedupStore::new();
    let window = Duration::from_secs(30);
    let t0 = Instant::now();

    assert!(!store.check_and_record_at(event("u1", "c1", "hi", t0), window, t0));
    assert!(!store.check_and_record_at(event("u1", "c2", "hi", t0), window, t0));
    assert_eq!(store.len(), 2);
}

#[test]
fn concurrent_checks_and_sweeps_do_not_corrupt_the_store() {
    let store = Arc::new(DedupStore::new());
    let window = Duration::from_secs(30);
    let mut handles = Vec::new();

    // Many actors hammering the same cache while a sweeper runs.
    for actor in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            for i in 0..200 {
                let text = format!("msg {}", i % 10);
                store.check_and_record(
                    EventRecord::new(format!("u{actor}"), "c1", text),
                    window,
                );
            }
        }));
    }

    let sweeper = {
        let store = Arc::clone(&store);
        std::thread::spawn(move || {
            for _ in 0..100 {
                store.evict(Duration::ZERO);
                std::thread::yield_now();
            }
        })
    };

    for handle in handles {
        handle.join().expect("actor thread panicked");
    }
    sweeper.join().expect("sweeper thread panicked");

    // A final sweep with zero max-age clears whatever survived the race.
    store.evict_at(Duration::ZERO, Instant::now() + Duration::from_secs(1));
    assert!(store.is_empty());
}
