// Rust guideline compliant 2026-10-13

//! Unit tests for the key-value persistence layer.
//!
//! These tests validate default fallbacks, masked failures and atomic
//! directory writes.

use stacks_core::{DirectoryMedium, KeyValueMedium, KvStore, MemoryMedium, UnavailableMedium};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_absent_key_returns_default() {
    let kv = KvStore::new(MemoryMedium::new());
    let value: Vec<String> = kv.get("books", vec!["fallback".to_string()]);
    assert_eq!(value, vec!["fallback".to_string()]);
}

#[test]
fn test_set_then_get() {
    let kv = KvStore::new(MemoryMedium::new());
    kv.set("counts", &vec![1, 2, 3]);
    let value: Vec<i32> = kv.get("counts", Vec::new());
    assert_eq!(value, vec![1, 2, 3]);
}

#[test]
fn test_corrupt_value_returns_default() {
    let medium = MemoryMedium::new();
    medium
        .write("books", "[{\"id\": \"1\", \"title\":")
        .expect("Failed to write raw value");

    let kv = KvStore::new(medium);
    let value: Vec<serde_json::Value> = kv.get("books", Vec::new());
    assert!(value.is_empty(), "Corrupt JSON should fall back to default");
}

#[test]
fn test_wrong_shape_returns_default() {
    let medium = MemoryMedium::new();
    medium
        .write("users", "{\"not\": \"an array\"}")
        .expect("Failed to write raw value");

    let kv = KvStore::new(medium);
    let value: Vec<String> = kv.get("users", vec!["default".to_string()]);
    assert_eq!(value, vec!["default".to_string()]);
}

#[test]
fn test_unavailable_medium_masks_everything() {
    let kv = KvStore::new(UnavailableMedium);
    kv.set("books", &vec!["a"]);
    assert!(kv.try_set("books", &vec!["a"]).is_ok());
    let value: Vec<String> = kv.get("books", Vec::new());
    assert!(value.is_empty(), "Nothing should be stored without a medium");
}

#[test]
fn test_invalid_key_is_masked_on_set() {
    let kv = KvStore::new(MemoryMedium::new());
    kv.set("../escape", &1);
    assert!(kv.try_set("../escape", &1).is_err());
    assert!(kv.medium().keys().is_empty());
}

#[test]
fn test_memory_medium_rejects_invalid_keys_everywhere() {
    let medium = MemoryMedium::new();
    for key in ["", "../escape", "a/b"] {
        assert!(medium.read(key).is_err(), "read accepted {key:?}");
        assert!(medium.write(key, "1").is_err(), "write accepted {key:?}");
        assert!(medium.remove(key).is_err(), "remove accepted {key:?}");
    }
    assert!(medium.remove("books").is_ok());
}

#[test]
fn test_memory_medium_clones_share_entries() {
    let first = KvStore::new(MemoryMedium::new());
    let second = KvStore::new(first.medium().clone());

    first.set("transactions", &vec!["t1"]);
    let seen: Vec<String> = second.get("transactions", Vec::new());
    assert_eq!(seen, vec!["t1".to_string()]);
}

#[test]
fn test_directory_medium_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let medium = DirectoryMedium::new(temp_dir.path().join("data")).expect("Failed to create medium");
    let kv = KvStore::new(medium);

    kv.try_set("books", &vec!["Clean Code"])
        .expect("Failed to write");

    let path = temp_dir.path().join("data").join("books.json");
    assert!(path.exists(), "Value should live in books.json");
    assert!(
        !temp_dir.path().join("data").join("books.json.tmp").exists(),
        "Temp file should be renamed away"
    );

    let reopened = KvStore::new(
        DirectoryMedium::new(temp_dir.path().join("data")).expect("Failed to create medium"),
    );
    let value: Vec<String> = reopened.get("books", Vec::new());
    assert_eq!(value, vec!["Clean Code".to_string()]);
}

#[test]
fn test_directory_medium_missing_dir_reads_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let medium = DirectoryMedium::new(temp_dir.path().join("nowhere")).expect("Failed to create medium");
    let kv = KvStore::new(medium);
    let value: Vec<String> = kv.get("books", Vec::new());
    assert!(value.is_empty());
}

#[test]
fn test_directory_medium_corrupt_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("books.json"), "not json").expect("Failed to write");

    let kv = KvStore::new(DirectoryMedium::new(temp_dir.path().to_path_buf()).expect("medium"));
    let value: Vec<String> = kv.get("books", vec!["default".to_string()]);
    assert_eq!(value, vec!["default".to_string()]);
}

#[test]
fn test_directory_medium_remove() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let medium = DirectoryMedium::new(temp_dir.path().to_path_buf()).expect("medium");

    medium.write("users", "[]").expect("Failed to write");
    medium.remove("users").expect("Failed to remove");
    medium.remove("users").expect("Removing twice should be fine");
    assert_eq!(medium.read("users").expect("Failed to read"), None);
}

#[test]
fn test_directory_medium_rejects_empty_path() {
    assert!(DirectoryMedium::new(std::path::PathBuf::new()).is_err());
}
