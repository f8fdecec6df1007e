//! Card resolution entry point.
//!
//! `CardClient` bundles the collaborators resolution needs — task
//! source, lineage resolver, path resolver, backend registry — as
//! explicit wiring. `get_cards` walks one resolution sequence:
//! normalize the task reference, optionally redirect through resume
//! lineage, resolve the flow's card store, resolve matching paths, and
//! wrap them in a container.

use crate::container::CardContainer;
use crate::traits::{CardPathResolver, LineageResolver, TaskSource};
use crate::{ClientError, ClientResult};
use cards_store::{config, BackendRegistry, CardStore};
use cards_types::{CardSelector, TaskHandle, TaskRef, TaskScope};
use std::sync::Arc;

/// Metadata key naming the storage backend a task wrote through.
pub const DS_TYPE_KEY: &str = "ds-type";
/// Metadata key naming the storage root a task wrote under.
pub const DS_ROOT_KEY: &str = "ds-root";

/// Client-side accessor for the cards stored by workflow tasks.
pub struct CardClient {
    tasks: Arc<dyn TaskSource>,
    lineage: Arc<dyn LineageResolver>,
    resolver: Arc<dyn CardPathResolver>,
    backends: BackendRegistry,
}

impl CardClient {
    pub fn new(
        tasks: Arc<dyn TaskSource>,
        lineage: Arc<dyn LineageResolver>,
        resolver: Arc<dyn CardPathResolver>,
        backends: BackendRegistry,
    ) -> Self {
        Self {
            tasks,
            lineage,
            resolver,
            backends,
        }
    }

    /// Resolve the cards stored for a task.
    ///
    /// Pathspec references resolve through the task source under the
    /// unrestricted scope, so a scoped lookup can never mismatch; a
    /// handle is used as-is. With `selector.follow_resumed` set (the
    /// default), a task cloned from an earlier run resolves against its
    /// clone origin and the container reports that redirection.
    pub fn get_cards(&self, task: TaskRef, selector: CardSelector) -> ClientResult<CardContainer> {
        let mut task = match task {
            TaskRef::Pathspec(pathspec) => {
                self.tasks.task(&pathspec, &TaskScope::Unrestricted)?
            }
            TaskRef::Handle(handle) => handle,
        };

        let mut origin_pathspec = None;
        if selector.follow_resumed {
            if let Some(origin) = self.lineage.resumed_info(&task)? {
                tracing::info!(
                    pathspec = %task.pathspec(),
                    origin = %origin,
                    "following resume lineage"
                );
                task = self.tasks.task(&origin, &TaskScope::Unrestricted)?;
                origin_pathspec = Some(origin);
            }
        }

        let store = Arc::new(self.flow_store_for(&task)?);
        let (paths, store) = self.resolver.resolve(store, task.pathspec(), &selector)?;
        tracing::debug!(
            pathspec = %task.pathspec(),
            cards = paths.len(),
            "card paths resolved"
        );

        let from_resumed = origin_pathspec.is_some();
        Ok(CardContainer::new(paths, store, from_resumed, origin_pathspec))
    }

    /// Derive the flow-scoped card store for a task from its metadata.
    ///
    /// The backend comes from the `ds-type` entry; the root comes from
    /// the backend's configured default, falling back to the task's
    /// `ds-root` entry joined with the card subdirectory suffix. The
    /// root is resolved here or not at all: a store handle is never
    /// constructed without one.
    fn flow_store_for(&self, task: &TaskHandle) -> ClientResult<CardStore> {
        let pathspec = task.pathspec();

        let ds_type = task
            .metadata_value(DS_TYPE_KEY)
            .ok_or_else(|| ClientError::UnresolvableDatastore(pathspec.clone()))?;
        let backend = self.backends.get(ds_type)?;

        let root = match backend.default_root() {
            Some(root) => root,
            None => task
                .metadata_value(DS_ROOT_KEY)
                .map(|ds_root| {
                    format!(
                        "{}/{}",
                        ds_root.trim_end_matches('/'),
                        config::CARD_ROOT_SUFFIX
                    )
                })
                .ok_or_else(|| ClientError::UnresolvedStorageRoot {
                    pathspec: pathspec.clone(),
                    backend: ds_type.to_string(),
                })?,
        };

        let store = backend.open(&root)?;
        Ok(CardStore::new(pathspec.flow_name(), store, root))
    }
}
