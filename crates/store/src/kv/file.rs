//! File-backed key-value store.

use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, KvError};

/// One file per key beneath a root directory.
///
/// The desktop stand-in for the browser's local storage: a small app-data
/// directory holding the catalog document. Keys map directly to file
/// names, which is fine for the fixed keys this workspace uses.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| KvError::Write {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Open a store under the OS app-data directory
    /// (`{data_dir}/fibertech`).
    pub fn open_default() -> Result<Self, KvError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut home| {
                    home.push(".local");
                    home.push("share");
                    home
                })
            })
            .ok_or_else(|| KvError::Backend("no OS data directory available".to_string()))?;
        Self::open(base.join("fibertech"))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileKvStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KvError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), KvError> {
        std::fs::write(self.path_for(key), bytes).map_err(|source| KvError::Write {
            key: key.to_string(),
            source,
        })
    }
}
