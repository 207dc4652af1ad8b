//! Project snapshots
//!
//! A snapshot is the JSON form of one project's three row sets:
//!
//! ```json
//! { "project_id": "proj-1", "phases": [...], "milestones": [...], "tasks": [...] }
//! ```
//!
//! Row arrays stay untyped here; validation happens in the loader.

use crate::error::StoreError;
use plan_model::de::null_as_default;
use plan_model::{PlanRows, ProjectId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Raw rows of one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Owning project
    pub project_id: ProjectId,
    /// Phase rows
    #[serde(default, deserialize_with = "null_as_default")]
    pub phases: Vec<Value>,
    /// Milestone rows
    #[serde(default, deserialize_with = "null_as_default")]
    pub milestones: Vec<Value>,
    /// Task rows
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Value>,
}

impl ProjectSnapshot {
    /// Create empty snapshot
    #[inline]
    #[must_use]
    pub fn new(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: project_id.into(),
            phases: Vec::new(),
            milestones: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// With raw rows
    #[inline]
    #[must_use]
    pub fn with_rows(mut self, phases: Vec<Value>, milestones: Vec<Value>, tasks: Vec<Value>) -> Self {
        self.phases = phases;
        self.milestones = milestones;
        self.tasks = tasks;
        self
    }

    /// Encode typed rows
    ///
    /// # Errors
    /// Returns error if a record fails to encode
    pub fn from_rows(project_id: impl Into<ProjectId>, rows: &PlanRows) -> Result<Self, StoreError> {
        Ok(Self::new(project_id).with_rows(
            encode_all(&rows.phases)?,
            encode_all(&rows.milestones)?,
            encode_all(&rows.tasks)?,
        ))
    }

    /// Parse snapshot document
    ///
    /// # Errors
    /// [`StoreError::SnapshotFormat`] for malformed JSON or a missing `project_id`
    pub fn from_json_str(document: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and parse snapshot file
    ///
    /// # Errors
    /// [`StoreError::SnapshotIo`] if the file cannot be read, plus
    /// everything [`ProjectSnapshot::from_json_str`] reports
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let document = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::SnapshotIo {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Read snapshot {} ({} bytes)", path.display(), document.len());
        Self::from_json_str(&document)
    }

    /// Total number of raw rows
    #[inline]
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.phases.len() + self.milestones.len() + self.tasks.len()
    }
}

fn encode_all<T: Serialize>(records: &[T]) -> Result<Vec<Value>, StoreError> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(StoreError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_model::{Phase, Task};

    #[test]
    fn parses_document_with_null_sets() {
        let snapshot = ProjectSnapshot::from_json_str(
            r#"{"project_id": "proj-1", "phases": [{"phase_id": "P1"}], "tasks": null}"#,
        )
        .unwrap();

        assert_eq!(snapshot.project_id.as_str(), "proj-1");
        assert_eq!(snapshot.phases.len(), 1);
        assert!(snapshot.milestones.is_empty());
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn missing_project_is_format_error() {
        let err = ProjectSnapshot::from_json_str(r#"{"phases": []}"#).unwrap_err();
        assert!(matches!(err, StoreError::SnapshotFormat(_)));
    }

    #[test]
    fn typed_rows_round_trip_through_boundary() {
        let rows = PlanRows::new(
            vec![Phase::new("P1", 1, "Launch")],
            vec![],
            vec![Task::new("T1", "P1", 1, "Pitch").with_owner("Ana")],
        );
        let snapshot = ProjectSnapshot::from_rows("proj-1", &rows).unwrap();
        let decoded =
            PlanRows::from_json_rows(&snapshot.phases, &snapshot.milestones, &snapshot.tasks)
                .unwrap();
        assert_eq!(decoded, rows);
    }

    #[tokio::test]
    async fn load_missing_file() {
        let err = ProjectSnapshot::load("/nonexistent/plan.json").await.unwrap_err();
        assert!(matches!(err, StoreError::SnapshotIo { .. }));
    }
}
