//! Integration tests for the JSON-file backend and validated reads.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use sift_store::{JsonFileStore, KeyValueStore, get_validated};

#[test]
fn test_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::new(&path);
    assert_eq!(store.get("academy_id").unwrap(), None);

    store.set("academy_id", "abc123XYZ9").unwrap();
    store.set("contact", "user@example.com").unwrap();

    // A fresh handle sees the persisted state
    let reopened = JsonFileStore::new(&path);
    assert_eq!(
        reopened.get("academy_id").unwrap(),
        Some("abc123XYZ9".to_owned())
    );

    let mut store = JsonFileStore::new(&path);
    store.remove("contact").unwrap();
    assert_eq!(store.get("contact").unwrap(), None);
}

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("never-written.json"));
    assert_eq!(store.get("anything").unwrap(), None);
    assert_eq!(get_validated(&store, "anything", |_| true), None);
}

#[test]
fn test_corrupt_file_is_an_error_but_validated_read_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.get("k").is_err());

    // The wrapper normalizes the fault: the caller only ever sees None
    assert_eq!(get_validated(&store, "k", |_| true), None);
}

#[test]
fn test_schema_drift_is_caught_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    // A prior, laxer version of the rules let this through
    let mut store = JsonFileStore::new(&path);
    store.set("academy_id", "bad id!").unwrap();

    let got = get_validated(&store, "academy_id", sift::is_valid_identifier);
    assert_eq!(got, None);
}
