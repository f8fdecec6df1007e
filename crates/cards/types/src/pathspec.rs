//! Task pathspecs: `flow/run/step/task` identifiers.
//!
//! A pathspec addresses one task execution inside a workflow run. The card
//! accessor only deals in fully-qualified, four-component pathspecs;
//! anything else is rejected before storage is ever touched.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Components in a fully-qualified task pathspec.
const COMPONENTS: usize = 4;

/// Errors raised while interpreting a task pathspec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathspecError {
    /// The string form did not split into exactly four components.
    #[error(
        "incorrect pathspec '{pathspec}': expected flow/run/step/task, found {components} component(s)"
    )]
    Malformed { pathspec: String, components: usize },
}

/// Fully-qualified identifier of one task execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pathspec {
    flow: String,
    run: String,
    step: String,
    task: String,
}

impl Pathspec {
    /// Build a pathspec from its four components.
    pub fn new(
        flow: impl Into<String>,
        run: impl Into<String>,
        step: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            flow: flow.into(),
            run: run.into(),
            step: step.into(),
            task: task.into(),
        }
    }

    /// The flow this task belongs to (first component).
    pub fn flow_name(&self) -> &str {
        &self.flow
    }

    pub fn run_id(&self) -> &str {
        &self.run
    }

    pub fn step_name(&self) -> &str {
        &self.step
    }

    pub fn task_id(&self) -> &str {
        &self.task
    }

    /// A copy of this pathspec pointing at a different run and task,
    /// keeping flow and step. Used when re-pointing at a clone origin.
    pub fn with_run_and_task(&self, run: impl Into<String>, task: impl Into<String>) -> Self {
        Self::new(self.flow.clone(), run, self.step.clone(), task)
    }
}

impl FromStr for Pathspec {
    type Err = PathspecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != COMPONENTS {
            return Err(PathspecError::Malformed {
                pathspec: s.to_string(),
                components: parts.len(),
            });
        }
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

impl fmt::Display for Pathspec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.flow, self.run, self.step, self.task)
    }
}

impl Serialize for Pathspec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pathspec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_accessors() {
        let ps: Pathspec = "MyFlow/123/start/456".parse().unwrap();
        assert_eq!(ps.flow_name(), "MyFlow");
        assert_eq!(ps.run_id(), "123");
        assert_eq!(ps.step_name(), "start");
        assert_eq!(ps.task_id(), "456");
    }

    #[test]
    fn test_display_round_trip() {
        let ps = Pathspec::new("MyFlow", "123", "start", "456");
        let rendered = ps.to_string();
        assert_eq!(rendered, "MyFlow/123/start/456");
        assert_eq!(rendered.parse::<Pathspec>().unwrap(), ps);
    }

    #[test]
    fn test_rejects_too_few_components() {
        let err = "MyFlow/123/start".parse::<Pathspec>().unwrap_err();
        assert!(matches!(err, PathspecError::Malformed { components: 3, .. }));
    }

    #[test]
    fn test_rejects_too_many_components() {
        let err = "MyFlow/123/start/456/extra".parse::<Pathspec>().unwrap_err();
        assert!(matches!(err, PathspecError::Malformed { components: 5, .. }));
    }

    #[test]
    fn test_rejects_bare_name() {
        let err = "MyFlow".parse::<Pathspec>().unwrap_err();
        assert!(matches!(err, PathspecError::Malformed { components: 1, .. }));
    }

    #[test]
    fn test_with_run_and_task() {
        let ps = Pathspec::new("MyFlow", "123", "start", "456");
        let origin = ps.with_run_and_task("100", "200");
        assert_eq!(origin.to_string(), "MyFlow/100/start/200");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let ps = Pathspec::new("MyFlow", "123", "start", "456");
        let json = serde_json::to_string(&ps).unwrap();
        assert_eq!(json, "\"MyFlow/123/start/456\"");
        let back: Pathspec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ps);
    }
}
