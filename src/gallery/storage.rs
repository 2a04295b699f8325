//! Key/value persistence backends for the gallery

use crate::io::configuration::STORAGE_EXTENSION;
use crate::io::error::{Result, file_system_error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String-keyed storage holding one serialized value per key
pub trait StorageBackend {
    /// Read the value under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be modified
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that backs `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{STORAGE_EXTENSION}"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| file_system_error(path, "read", e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| file_system_error(self.root.clone(), "create directory", e))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| file_system_error(path, "write", e))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path).map_err(|e| file_system_error(path, "remove", e))
    }
}

/// In-process storage, mostly for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one raw value
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
