use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{RecordKey, RecordStore};
use crate::error::StoreError;

/// Stores each record as `<root>/<key file name>`.
///
/// Reads and writes are whole-file and blocking. A write lands in a hidden
/// temp file next to the target and is then renamed over it, so a record
/// file is either the old or the new version, never a torn one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Like [`JsonFileStore::new`], creating `root` if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root: PathBuf = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `key` to its file, refusing identifiers that would escape `root`.
    pub fn path_for(&self, key: &RecordKey) -> Result<PathBuf, StoreError> {
        let id: &str = key.id();
        let escapes: bool = id.contains(['/', '\\', '\0']) || id == "." || id == "..";
        if id.is_empty() || escapes {
            return Err(StoreError::InvalidKey {
                kind: key.kind(),
                id: id.to_string(),
            });
        }
        Ok(self.root.join(key.file_name()))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &RecordKey) -> Result<Option<Value>, StoreError> {
        let path: PathBuf = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("read {}", path.display());
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn put(&self, key: &RecordKey, record: &Value) -> Result<(), StoreError> {
        let path: PathBuf = self.path_for(key)?;
        let tmp_path: PathBuf = self.root.join(format!(".{}.tmp", key.file_name()));
        let bytes: Vec<u8> = serde_json::to_vec(record)?;

        fs::write(&tmp_path, bytes).map_err(io_error(&tmp_path))?;
        fs::rename(&tmp_path, &path).map_err(io_error(&path))?;

        debug!("wrote {}", path.display());
        Ok(())
    }

    fn delete(&self, key: &RecordKey) -> Result<bool, StoreError> {
        let path: PathBuf = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path)(e)),
        }
    }
}
