//! File-backed slot store.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use storefront::storage::{KeyValueStore, StorageError};
use tracing::warn;

/// Slots kept as one JSON object in a file.
///
/// A missing file holds no slots. Writes create parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.load().unwrap_or_else(|error| {
            warn!(%error, path = %self.path.display(), "replacing unreadable slot file");

            BTreeMap::new()
        });

        slots.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(&slots)?)?;

        Ok(())
    }
}
