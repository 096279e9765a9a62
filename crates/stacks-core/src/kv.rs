// Rust guideline compliant 2026-10-12

//! Persistent key-value storage.
//!
//! A [`KeyValueMedium`] stores raw JSON strings under string keys. The
//! [`KvStore`] wrapper layers typed access on top and masks every failure:
//! reads fall back to a caller-supplied default and writes are logged and
//! dropped. Callers that need to see the failure use [`KvStore::try_set`].

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A place where string values can be kept under string keys.
pub trait KeyValueMedium {
    /// Returns false when there is no medium at all (e.g. a headless render).
    fn is_available(&self) -> bool {
        true
    }

    /// Reads the raw value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Validates that a key is safe to use as a file stem.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Invalid storage key: '{}'", key),
        )));
    }
    Ok(())
}

/// Directory-backed medium: one `<key>.json` file per key.
///
/// Writes go to a temp file that is synced and renamed over the target, so a
/// reader never observes a half-written value.
#[derive(Debug, Clone)]
pub struct DirectoryMedium {
    dir: PathBuf,
}

impl DirectoryMedium {
    /// Creates a medium rooted at `dir`. The directory is created lazily on
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key contains characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Executes a closure with an exclusive lock on the medium directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held elsewhere or the closure fails.
    fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(".lock"))?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

impl KeyValueMedium for DirectoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        self.with_lock(|| {
            let temp_path = path.with_extension("json.tmp");
            {
                let mut file = File::create(&temp_path)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &path)?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(());
        }
        self.with_lock(|| Ok(std::fs::remove_file(&path)?))
    }
}

/// In-memory medium.
///
/// Clones share the same entries, which lets two stores observe one medium
/// the way two browser tabs share one origin's storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryMedium {
    /// Creates an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the keys currently stored, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}

/// A medium that does not exist. Reads see nothing; writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableMedium;

impl KeyValueMedium for UnavailableMedium {
    fn is_available(&self) -> bool {
        false
    }

    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Typed, failure-masking access to a [`KeyValueMedium`].
#[derive(Debug, Clone)]
pub struct KvStore<M> {
    medium: M,
}

impl<M: KeyValueMedium> KvStore<M> {
    /// Wraps a medium.
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Returns the underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Returns the value stored under `key`, or `default`.
    ///
    /// The default is returned when the key is absent, the medium is
    /// unavailable, the medium cannot be read, or the stored content does not
    /// parse as `T`. Failures are logged, never returned.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        if !self.medium.is_available() {
            return default;
        }

        let raw = match self.medium.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read from storage");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unparseable stored value");
                default
            }
        }
    }

    /// Returns true if `key` holds a value. Read failures count as absent.
    pub fn contains(&self, key: &str) -> bool {
        if !self.medium.is_available() {
            return false;
        }
        matches!(self.medium.read(key), Ok(Some(_)))
    }

    /// Serializes `value` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails. An unavailable
    /// medium is not an error.
    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        if !self.medium.is_available() {
            return Ok(());
        }
        let json = serde_json::to_string(value)?;
        self.medium.write(key, &json)
    }

    /// Serializes `value` and stores it under `key`, logging any failure.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!(key, error = %e, "failed to write to storage");
        }
    }

    /// Removes `key`, logging any failure.
    pub fn remove(&self, key: &str) {
        if !self.medium.is_available() {
            return;
        }
        if let Err(e) = self.medium.remove(key) {
            tracing::warn!(key, error = %e, "failed to remove from storage");
        }
    }
}
