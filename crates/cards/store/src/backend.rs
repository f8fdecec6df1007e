//! Storage backend seam.
//!
//! A backend is addressed by the identifier recorded in task metadata
//! under `ds-type`. Opening a backend at a root yields an object store;
//! the card store handle wraps one of those, scoped to a flow.

use crate::StoreResult;
use std::sync::Arc;

/// Read side of an object store a card store draws from.
pub trait ObjectStore: Send + Sync {
    /// Load the object stored at `path` (root-relative, `/`-separated).
    fn load(&self, path: &str) -> StoreResult<Vec<u8>>;

    /// List object paths under `prefix`, lexicographically sorted so
    /// resolved card order is deterministic.
    fn list(&self, prefix: &str) -> StoreResult<Vec<String>>;
}

/// One pluggable storage backend.
pub trait StorageBackend: Send + Sync {
    /// Backend identifier, as recorded in task metadata under `ds-type`.
    fn id(&self) -> &str;

    /// Configured storage root for this backend, when one is defined.
    fn default_root(&self) -> Option<String>;

    /// Open an object store rooted at `root`.
    fn open(&self, root: &str) -> StoreResult<Arc<dyn ObjectStore>>;
}
