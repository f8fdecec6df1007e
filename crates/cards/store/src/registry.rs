//! Backend registry: maps `ds-type` identifiers to storage backends.

use crate::backend::StorageBackend;
use crate::local::LocalBackend;
use crate::memory::MemoryBackend;
use crate::{StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of storage backends, keyed by backend identifier.
#[derive(Default)]
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn StorageBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the shipped backends (`local`, `memory`) installed.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LocalBackend::new()));
        registry.register(Arc::new(MemoryBackend::new()));
        registry
    }

    /// Register a backend, replacing any previous one with the same id.
    pub fn register(&mut self, backend: Arc<dyn StorageBackend>) {
        let id = backend.id().to_string();
        self.backends.insert(id.clone(), backend);
        tracing::info!(backend = %id, "Storage backend registered");
    }

    /// Look up a backend by identifier.
    pub fn get(&self, id: &str) -> StoreResult<Arc<dyn StorageBackend>> {
        self.backends
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownBackend(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.backends.contains_key(id)
    }

    /// Registered backend identifiers, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.backends.keys().cloned().collect();
        ids.sort();
        ids
    }
}
