//! Persistent key-value storage.
//!
//! The durable surface of the app is an async string store keyed by name.
//! `FileStorage` keeps one file per key under the configured data
//! directory; `MemoryStorage` backs tests and embedded use.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::CoreConfig;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage read failed: {message}")]
    Read { message: String },

    #[error("storage write failed: {message}")]
    Write { message: String },
}

/// Async string store keyed by name. `get` of a key that was never
/// written yields `None`, not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key under the data
/// directory. The directory is created on first write.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            dir: config.data_dir.clone(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                message: e.to_string(),
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Write {
                message: e.to_string(),
            })?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StorageError::Write {
                message: e.to_string(),
            })
    }
}

/// In-memory store for tests and embedded use.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
