//! Durable key-value slots
//!
//! The cart is persisted into a single named slot. Front ends decide where
//! that slot lives (browser local storage, a file on disk); the library only
//! needs to read and overwrite text values by key.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all.
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    /// The backend refused a write (quota exceeded, private mode, ...).
    #[error("storage rejected write to {key:?}: {reason}")]
    Rejected {
        /// Slot that was being written
        key: String,
        /// Backend-provided reason
        reason: String,
    },

    /// IO error reading or writing a file-backed store.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be encoded or decoded.
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A durable key-value slot backend.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; values live as long as the store does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `value` already saved under `key`.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = FxHashMap::default();

        slots.insert(key.into(), value.into());

        Self { slots }
    }

    /// Peek at the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
