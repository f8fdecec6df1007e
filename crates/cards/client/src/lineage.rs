//! Resume-lineage resolution from task metadata.

use crate::{ClientResult, LineageResolver};
use cards_types::{Pathspec, TaskHandle};

/// Metadata key recording the run a resumed task was cloned from.
pub const ORIGIN_RUN_KEY: &str = "origin-run-id";
/// Metadata key recording the task a resumed task was cloned from.
pub const ORIGIN_TASK_KEY: &str = "origin-task-id";

/// Lineage resolver reading clone-origin entries off the task's own
/// metadata. Tasks that were never resumed carry neither entry.
#[derive(Debug, Default)]
pub struct MetadataLineage;

impl MetadataLineage {
    pub fn new() -> Self {
        Self
    }
}

impl LineageResolver for MetadataLineage {
    fn resumed_info(&self, task: &TaskHandle) -> ClientResult<Option<Pathspec>> {
        let origin = match (
            task.metadata_value(ORIGIN_RUN_KEY),
            task.metadata_value(ORIGIN_TASK_KEY),
        ) {
            (Some(run), Some(task_id)) => Some(task.pathspec().with_run_and_task(run, task_id)),
            _ => None,
        };
        Ok(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloned_task_yields_origin_pathspec() {
        let task = TaskHandle::new("MyFlow/123/start/456".parse().unwrap())
            .with_metadata(ORIGIN_RUN_KEY, "100")
            .with_metadata(ORIGIN_TASK_KEY, "200");
        let origin = MetadataLineage::new().resumed_info(&task).unwrap();
        assert_eq!(origin.unwrap().to_string(), "MyFlow/100/start/200");
    }

    #[test]
    fn test_plain_task_has_no_lineage() {
        let task = TaskHandle::new("MyFlow/123/start/456".parse().unwrap());
        assert!(MetadataLineage::new().resumed_info(&task).unwrap().is_none());
    }

    #[test]
    fn test_partial_origin_metadata_is_ignored() {
        let task = TaskHandle::new("MyFlow/123/start/456".parse().unwrap())
            .with_metadata(ORIGIN_RUN_KEY, "100");
        assert!(MetadataLineage::new().resumed_info(&task).unwrap().is_none());
    }
}
