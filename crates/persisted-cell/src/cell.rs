//! Persisted Value Cell

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{StorageBackend, StorageError};

/// Read and parse the JSON value stored under `key`
pub fn load<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: StorageBackend,
{
    match storage.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(StorageError::Malformed),
        None => Ok(None),
    }
}

/// A value mirrored into one storage slot
///
/// The in-memory value is authoritative. Reads that fail fall back to the
/// initial value, writes that fail are logged and otherwise ignored.
#[derive(Debug)]
pub struct PersistedCell<T, S> {
    key: String,
    value: T,
    storage: S,
}

impl<T, S> PersistedCell<T, S>
where
    T: Serialize + DeserializeOwned,
    S: StorageBackend,
{
    /// Open the slot under `key`, using `initial` when it is empty or unreadable
    pub fn open(storage: S, key: impl Into<String>, initial: impl FnOnce() -> T) -> Self {
        let key = key.into();
        let value = match load(&storage, &key) {
            Ok(Some(value)) => {
                log::debug!("[persist] loaded '{}'", key);
                value
            }
            Ok(None) => {
                log::debug!("[persist] '{}' not found, using initial value", key);
                initial()
            }
            Err(e) => {
                log::error!("[persist] error retrieving '{}': {}", key, e);
                initial()
            }
        };

        let cell = Self { key, value, storage };
        cell.flush();
        cell
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it back
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.flush();
    }

    /// Mutate the value in place and write it back
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.flush();
        result
    }

    fn flush(&self) {
        if let Err(e) = self.try_flush() {
            log::error!("[persist] error saving '{}': {}", self.key, e);
        }
    }

    fn try_flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.value).map_err(StorageError::Serialize)?;
        self.storage.write(&self.key, &raw)?;
        log::debug!("[persist] saved '{}' ({} bytes)", self.key, raw.len());
        Ok(())
    }
}
