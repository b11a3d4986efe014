use std::fs;

use chrono::Utc;
use tempfile::TempDir;

use footprint_core::calc::{compute_footprint, round2};
use footprint_core::history::{HistoryEntry, HistoryStore, JsonHistoryStore, HISTORY_CAPACITY};
use footprint_core::types::Measurements;

fn store_in(dir: &TempDir) -> JsonHistoryStore {
    JsonHistoryStore::new(dir.path().join("history.json"))
}

fn entry_with_km(km: f64) -> HistoryEntry {
    let inputs = Measurements {
        transportation_km: km,
        energy_kwh: 1.0,
        food_meals: 1.0,
        waste_kg: 1.0,
        purchases: 1.0,
    };
    let result = compute_footprint(&inputs).unwrap();
    HistoryEntry::new(inputs, &result, Utc::now())
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn record_front_inserts_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.record(entry_with_km(1.0)).unwrap();
    let entries = store.record(entry_with_km(2.0)).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].inputs.transportation_km, 2.0);
    assert_eq!(entries[1].inputs.transportation_km, 1.0);

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, entries);
}

#[test]
fn history_caps_at_twelve_entries() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    for i in 0..13 {
        store.record(entry_with_km(f64::from(i))).unwrap();
    }

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), HISTORY_CAPACITY);
    // Newest first, the oldest (km = 0) evicted.
    assert_eq!(entries[0].inputs.transportation_km, 12.0);
    assert_eq!(entries.last().unwrap().inputs.transportation_km, 1.0);
}

#[test]
fn clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // Clearing an empty history is a no-op.
    store.clear().unwrap();
    store.clear().unwrap();

    store.record(entry_with_km(1.0)).unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_file_fails_closed() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    fs::write(store.path(), "not json {{").unwrap();
    assert!(store.load().unwrap().is_empty());

    // A valid JSON document of the wrong shape is just as dead.
    fs::write(store.path(), "[1, 2, 3]").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn unsupported_version_fails_closed() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    fs::write(store.path(), r#"{"version": 99, "entries": []}"#).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn recording_over_a_malformed_file_recovers() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    fs::write(store.path(), "garbage").unwrap();
    let entries = store.record(entry_with_km(3.0)).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn stored_total_is_rounded_to_two_decimals() {
    let inputs = Measurements {
        transportation_km: 0.1,
        energy_kwh: 0.3,
        food_meals: 0.7,
        waste_kg: 0.9,
        purchases: 0.11,
    };
    let result = compute_footprint(&inputs).unwrap();
    let entry = HistoryEntry::new(inputs, &result, Utc::now());

    assert_eq!(entry.total_weekly, round2(result.total));
    assert_eq!(entry.parts_weekly, result.parts);
}
