//! In-memory reference backend.
//!
//! This adapter is deterministic and test-friendly. Production
//! deployments should use a disk- or object-storage-backed backend;
//! the memory backend exists so embedders and tests can resolve cards
//! without touching the filesystem.

use crate::backend::{ObjectStore, StorageBackend};
use crate::{StoreError, StoreResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// Identifier of the in-memory backend.
pub const MEMORY_BACKEND_ID: &str = "memory";

/// In-memory object store: a sorted map of path to bytes.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object, replacing any previous content at the path.
    pub fn put(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> StoreResult<()> {
        let mut guard = self
            .objects
            .write()
            .map_err(|_| StoreError::Backend("object map lock poisoned".to_string()))?;
        guard.insert(path.into(), bytes.into());
        Ok(())
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn load(&self, path: &str) -> StoreResult<Vec<u8>> {
        let guard = self
            .objects
            .read()
            .map_err(|_| StoreError::Backend("object map lock poisoned".to_string()))?;
        guard
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let guard = self
            .objects
            .read()
            .map_err(|_| StoreError::Backend("object map lock poisoned".to_string()))?;
        // BTreeMap keys come out sorted already.
        Ok(guard
            .keys()
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// In-memory storage backend, handing out one shared store per root so
/// content seeded before resolution is visible to the resolved handle.
#[derive(Default)]
pub struct MemoryBackend {
    stores: RwLock<HashMap<String, Arc<InMemoryObjectStore>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared store for `root`, created on first use.
    pub fn store_for(&self, root: &str) -> StoreResult<Arc<InMemoryObjectStore>> {
        let mut guard = self
            .stores
            .write()
            .map_err(|_| StoreError::Backend("store map lock poisoned".to_string()))?;
        Ok(guard
            .entry(root.to_string())
            .or_insert_with(|| Arc::new(InMemoryObjectStore::new()))
            .clone())
    }
}

impl StorageBackend for MemoryBackend {
    fn id(&self) -> &str {
        MEMORY_BACKEND_ID
    }

    fn default_root(&self) -> Option<String> {
        // Memory roots are just namespaces; any fixed name will do.
        Some(MEMORY_BACKEND_ID.to_string())
    }

    fn open(&self, root: &str) -> StoreResult<Arc<dyn ObjectStore>> {
        Ok(self.store_for(root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_load_round_trip() {
        let store = InMemoryObjectStore::new();
        store.put("a/b/card.html", b"<html/>".to_vec()).unwrap();
        assert_eq!(store.load("a/b/card.html").unwrap(), b"<html/>");
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let store = InMemoryObjectStore::new();
        let err = store.load("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_list_filters_by_prefix_and_sorts() {
        let store = InMemoryObjectStore::new();
        store.put("t/cards/b.html", b"b".to_vec()).unwrap();
        store.put("t/cards/a.html", b"a".to_vec()).unwrap();
        store.put("other/c.html", b"c".to_vec()).unwrap();

        let listed = store.list("t/cards").unwrap();
        assert_eq!(listed, ["t/cards/a.html", "t/cards/b.html"]);
    }

    #[test]
    fn test_backend_shares_store_per_root() {
        let backend = MemoryBackend::new();
        let seeded = backend.store_for("ns").unwrap();
        seeded.put("x.html", b"x".to_vec()).unwrap();

        let opened = backend.open("ns").unwrap();
        assert_eq!(opened.load("x.html").unwrap(), b"x");

        let other = backend.open("different-ns").unwrap();
        assert!(matches!(
            other.load("x.html"),
            Err(StoreError::NotFound(_))
        ));
    }
}
