use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;

mod fs;

/// Minimal durable store contract: a write observes either the previous or
/// the fully formed new value for a key, never a torn one.
pub trait KvStore: Send + Sync {
    /// Insert or fully replace the value stored under `key`.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    /// Fetch the latest value for `key`; absence is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() || key.split('/').any(str::is_empty) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// In-memory store for unit tests and embedders that do not need durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        guard.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        let guard = self
            .inner
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

/// Filesystem-backed store keeping one file per logical key under a root
/// directory. Replacement goes through a temp file and an atomic rename.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem location backing `key`; exposed for integration tests.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        fs::make_path(&self.root, key)
    }
}

impl KvStore for FsStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        fs::atomic_write_bytes(&self.root, key, value).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        match fs::read_bytes(&self.root, key) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}
