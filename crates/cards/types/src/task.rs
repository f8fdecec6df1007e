//! Task references, resolution scopes, and resolved task handles.
//!
//! The accessor never talks to the orchestration engine directly; it
//! receives either a pathspec still to be resolved or a `TaskHandle`
//! snapshot the orchestration client already produced.

use crate::{Pathspec, PathspecError};
use serde::{Deserialize, Serialize};

/// One named metadata entry attached to a task execution.
///
/// Entries are ordered; lookups scan in order and return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Resolved snapshot of a task as served by the orchestration client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskHandle {
    pathspec: Pathspec,
    metadata: Vec<MetadataEntry>,
}

impl TaskHandle {
    pub fn new(pathspec: Pathspec) -> Self {
        Self {
            pathspec,
            metadata: Vec::new(),
        }
    }

    /// Append one metadata entry, builder style.
    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::new(name, value));
        self
    }

    pub fn pathspec(&self) -> &Pathspec {
        &self.pathspec
    }

    /// All metadata entries in recording order.
    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    /// Value of the first metadata entry with the given name.
    pub fn metadata_value(&self, name: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }
}

/// Resolution scope for task lookups.
///
/// Passed explicitly to the task source instead of mutating ambient
/// namespace state. Pathspec references are resolved under
/// `Unrestricted` so a scoped lookup can never mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskScope {
    /// Match tasks in any namespace.
    Unrestricted,
    /// Match only tasks registered under the named namespace.
    Named(String),
}

/// A task reference accepted by the card accessor.
///
/// Either a pathspec still to be resolved through the task source, or a
/// handle the orchestration client already produced. Anything else does
/// not type-check, so there is no runtime "incorrect argument" case.
#[derive(Debug, Clone)]
pub enum TaskRef {
    Pathspec(Pathspec),
    Handle(TaskHandle),
}

impl From<Pathspec> for TaskRef {
    fn from(pathspec: Pathspec) -> Self {
        Self::Pathspec(pathspec)
    }
}

impl From<TaskHandle> for TaskRef {
    fn from(handle: TaskHandle) -> Self {
        Self::Handle(handle)
    }
}

impl TryFrom<&str> for TaskRef {
    type Error = PathspecError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self::Pathspec(value.parse()?))
    }
}

impl TryFrom<String> for TaskRef {
    type Error = PathspecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().try_into()
    }
}
