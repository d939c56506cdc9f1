//! Key-value persistence seam.

pub mod file;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

pub use file::FileKvStore;

/// Persistence backend failure.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage read failed for key '{key}': {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("storage write failed for key '{key}': {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// Synchronous byte store addressed by string keys.
///
/// The catalog persists as one JSON document under one fixed key, so the
/// interface stays small: read a key (absent is not an error) and replace
/// a key wholesale.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), KvError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), KvError> {
        (**self).write(key, bytes)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let map = self
            .inner
            .read()
            .map_err(|_| KvError::Backend("lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), KvError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| KvError::Backend("lock poisoned".to_string()))?;
        map.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
