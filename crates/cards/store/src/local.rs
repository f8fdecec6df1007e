//! Local-filesystem storage backend.

use crate::backend::{ObjectStore, StorageBackend};
use crate::{config, StoreError, StoreResult};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

/// Identifier of the local-disk backend.
pub const LOCAL_BACKEND_ID: &str = "local";

/// Object store reading from a directory tree on local disk.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn absolute(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn relative_key(&self, path: &std::path::Path) -> StoreResult<String> {
        let rel = path
            .strip_prefix(&self.root)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        let mut key = String::new();
        for component in rel.components() {
            let part = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| StoreError::Backend("non-UTF-8 path on disk".to_string()))?;
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(part);
        }
        Ok(key)
    }
}

impl ObjectStore for LocalObjectStore {
    fn load(&self, path: &str) -> StoreResult<Vec<u8>> {
        let full = self.absolute(path);
        if !full.is_file() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        Ok(fs::read(full)?)
    }

    fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let base = self.absolute(prefix);
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in WalkDir::new(&base) {
            let entry = entry.map_err(|err| StoreError::Backend(err.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            paths.push(self.relative_key(entry.path())?);
        }
        paths.sort();
        Ok(paths)
    }
}

/// Local-disk storage backend. The default root comes from
/// `CARDS_LOCAL_ROOT`.
#[derive(Default)]
pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalBackend {
    fn id(&self) -> &str {
        LOCAL_BACKEND_ID
    }

    fn default_root(&self) -> Option<String> {
        config::storage_root(LOCAL_BACKEND_ID)
    }

    fn open(&self, root: &str) -> StoreResult<Arc<dyn ObjectStore>> {
        Ok(Arc::new(LocalObjectStore::new(root)))
    }
}
