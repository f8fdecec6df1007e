//! Collaborator interfaces consumed by the card client.
//!
//! The orchestration engine, its metadata service, resume-lineage
//! bookkeeping, and card path resolution all live outside this layer.
//! The client only speaks to them through these seams; reference
//! implementations live in [`crate::memory`], [`crate::lineage`], and
//! [`crate::resolve`].

use crate::ClientResult;
use cards_store::CardStore;
use cards_types::{CardSelector, Pathspec, TaskHandle, TaskScope};
use std::sync::Arc;

/// Orchestration client surface: resolve a pathspec to a task handle.
pub trait TaskSource: Send + Sync {
    /// Resolve `pathspec` under `scope`.
    ///
    /// `TaskScope::Unrestricted` must match the task regardless of which
    /// namespace it was recorded under.
    fn task(&self, pathspec: &Pathspec, scope: &TaskScope) -> ClientResult<TaskHandle>;
}

/// Resume-lineage lookup.
pub trait LineageResolver: Send + Sync {
    /// The clone-origin pathspec of `task`, when the task was resumed.
    fn resumed_info(&self, task: &TaskHandle) -> ClientResult<Option<Pathspec>>;
}

/// Card path resolution against a task's history.
pub trait CardPathResolver: Send + Sync {
    /// Resolve the storage paths of the cards matching `selector`,
    /// together with the (possibly re-scoped) store to read them from.
    fn resolve(
        &self,
        store: Arc<CardStore>,
        pathspec: &Pathspec,
        selector: &CardSelector,
    ) -> ClientResult<(Vec<String>, Arc<CardStore>)>;
}
