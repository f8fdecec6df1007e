//! In-memory task source.
//!
//! Deterministic reference implementation of the orchestration-client
//! seam, for tests and embedding. Deployments talking to a real
//! metadata service implement [`crate::TaskSource`] against it instead.

use crate::{ClientError, ClientResult, TaskSource};
use cards_types::{Pathspec, TaskHandle, TaskScope};
use std::collections::HashMap;
use std::sync::RwLock;

struct RegisteredTask {
    handle: TaskHandle,
    namespace: Option<String>,
}

/// Task source backed by a map of registered task handles.
#[derive(Default)]
pub struct InMemoryTaskSource {
    tasks: RwLock<HashMap<String, RegisteredTask>>,
}

impl InMemoryTaskSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task visible in every scope.
    pub fn register(&self, handle: TaskHandle) {
        self.insert(handle, None);
    }

    /// Register a task under a namespace; a `Named` scope must match it.
    pub fn register_namespaced(&self, handle: TaskHandle, namespace: impl Into<String>) {
        self.insert(handle, Some(namespace.into()));
    }

    fn insert(&self, handle: TaskHandle, namespace: Option<String>) {
        if let Ok(mut guard) = self.tasks.write() {
            guard.insert(
                handle.pathspec().to_string(),
                RegisteredTask { handle, namespace },
            );
        }
    }
}

impl TaskSource for InMemoryTaskSource {
    fn task(&self, pathspec: &Pathspec, scope: &TaskScope) -> ClientResult<TaskHandle> {
        let guard = self
            .tasks
            .read()
            .map_err(|_| ClientError::Collaborator("task map lock poisoned".to_string()))?;
        let registered = guard
            .get(&pathspec.to_string())
            .ok_or_else(|| ClientError::TaskNotFound(pathspec.clone()))?;
        match scope {
            TaskScope::Unrestricted => Ok(registered.handle.clone()),
            TaskScope::Named(namespace) => {
                if registered.namespace.as_deref() == Some(namespace.as_str()) {
                    Ok(registered.handle.clone())
                } else {
                    // Scoped lookups do not see tasks outside their namespace.
                    Err(ClientError::TaskNotFound(pathspec.clone()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(pathspec: &str) -> TaskHandle {
        TaskHandle::new(pathspec.parse().unwrap()).with_metadata("ds-type", "memory")
    }

    #[test]
    fn test_unrestricted_scope_matches_any_namespace() {
        let source = InMemoryTaskSource::new();
        source.register_namespaced(make_task("MyFlow/123/start/456"), "user:someone");

        let ps: Pathspec = "MyFlow/123/start/456".parse().unwrap();
        let handle = source.task(&ps, &TaskScope::Unrestricted).unwrap();
        assert_eq!(handle.pathspec(), &ps);
    }

    #[test]
    fn test_named_scope_must_match() {
        let source = InMemoryTaskSource::new();
        source.register_namespaced(make_task("MyFlow/123/start/456"), "user:someone");

        let ps: Pathspec = "MyFlow/123/start/456".parse().unwrap();
        let matched = source.task(&ps, &TaskScope::Named("user:someone".to_string()));
        assert!(matched.is_ok());

        let mismatched = source.task(&ps, &TaskScope::Named("user:other".to_string()));
        assert!(matches!(mismatched, Err(ClientError::TaskNotFound(_))));
    }

    #[test]
    fn test_unknown_task_is_not_found() {
        let source = InMemoryTaskSource::new();
        let ps: Pathspec = "MyFlow/123/start/456".parse().unwrap();
        assert!(matches!(
            source.task(&ps, &TaskScope::Unrestricted),
            Err(ClientError::TaskNotFound(_))
        ));
    }
}
