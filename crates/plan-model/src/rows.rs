//! Row sets of one project
//!
//! [`PlanRows`] is the typed form of a fetch. Construction from raw JSON
//! checks every row and every identifier before anything downstream sees
//! the data.

use crate::error::{ModelError, RowError};
use crate::records::{Milestone, Phase, RecordKind, Task};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Phases, milestones and tasks of one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRows {
    /// Phase rows
    #[serde(default)]
    pub phases: Vec<Phase>,
    /// Milestone rows
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Task rows
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl PlanRows {
    /// Create from typed rows
    #[inline]
    #[must_use]
    pub fn new(phases: Vec<Phase>, milestones: Vec<Milestone>, tasks: Vec<Task>) -> Self {
        Self {
            phases,
            milestones,
            tasks,
        }
    }

    /// Total number of rows
    #[inline]
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.phases.len() + self.milestones.len() + self.tasks.len()
    }

    /// Check if no row is present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }

    /// Decode raw rows
    ///
    /// # Errors
    /// - [`ModelError::InvalidRows`] listing every row that failed to decode
    /// - [`ModelError::DuplicateId`] when an identifier is used by two rows
    pub fn from_json_rows(
        phases: &[Value],
        milestones: &[Value],
        tasks: &[Value],
    ) -> Result<Self, ModelError> {
        let mut errors = Vec::new();
        let rows = Self {
            phases: decode_rows(RecordKind::Phase, phases, &mut errors),
            milestones: decode_rows(RecordKind::Milestone, milestones, &mut errors),
            tasks: decode_rows(RecordKind::Task, tasks, &mut errors),
        };

        if !errors.is_empty() {
            tracing::debug!("Rejected {} plan rows", errors.len());
            return Err(ModelError::InvalidRows { errors });
        }

        rows.check_unique_ids()?;
        Ok(rows)
    }

    /// Decode whole JSON payloads; `null` counts as an empty set
    ///
    /// # Errors
    /// [`ModelError::NotAnArray`] for payloads that are not arrays, plus
    /// everything [`PlanRows::from_json_rows`] reports
    pub fn from_json_arrays(
        phases: &Value,
        milestones: &Value,
        tasks: &Value,
    ) -> Result<Self, ModelError> {
        Self::from_json_rows(
            as_rows(RecordKind::Phase, phases)?,
            as_rows(RecordKind::Milestone, milestones)?,
            as_rows(RecordKind::Task, tasks)?,
        )
    }

    /// Verify identifiers are unique across all three kinds
    ///
    /// Elements of the flattened plan are keyed by identifier alone, so a
    /// task may not reuse the id of a phase or milestone either.
    ///
    /// # Errors
    /// [`ModelError::DuplicateId`] for the first repeated identifier, tagged
    /// with the kind of the row that repeated it
    pub fn check_unique_ids(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::with_capacity(self.total_rows());
        first_duplicate(
            RecordKind::Phase,
            self.phases.iter().map(|p| p.id.as_str()),
            &mut seen,
        )?;
        first_duplicate(
            RecordKind::Milestone,
            self.milestones.iter().map(|m| m.id.as_str()),
            &mut seen,
        )?;
        first_duplicate(
            RecordKind::Task,
            self.tasks.iter().map(|t| t.id.as_str()),
            &mut seen,
        )
    }
}

fn as_rows(kind: RecordKind, payload: &Value) -> Result<&[Value], ModelError> {
    match payload {
        Value::Null => Ok(&[]),
        Value::Array(rows) => Ok(rows),
        other => Err(ModelError::NotAnArray {
            kind,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode_rows<T: DeserializeOwned>(
    kind: RecordKind,
    rows: &[Value],
    errors: &mut Vec<RowError>,
) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| match T::deserialize(row) {
            Ok(record) => Some(record),
            Err(e) => {
                errors.push(RowError::new(kind, index, e.to_string()));
                None
            }
        })
        .collect()
}

fn first_duplicate<'a>(
    kind: RecordKind,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ModelError> {
    for id in ids {
        if !seen.insert(id) {
            return Err(ModelError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_valid_rows() {
        let rows = PlanRows::from_json_rows(
            &[json!({"phase_id": "P1", "ordre_execution": 1})],
            &[json!({"jalon_id": "J1", "phase_parent_id": "P1", "jalon_index": 1})],
            &[
                json!({"tache_id": "T1", "phase_parent_id": "P1", "jalon_parent_id": "J1"}),
                json!({"tache_id": "T2", "phase_parent_id": "P1"}),
            ],
        )
        .unwrap();

        assert_eq!(rows.total_rows(), 4);
        assert!(rows.tasks[1].milestone_id.is_none());
    }

    #[test]
    fn collects_every_bad_row() {
        let err = PlanRows::from_json_rows(
            &[json!({"ordre_execution": 1})],
            &[],
            &[
                json!({"tache_id": "T1", "phase_parent_id": "P1"}),
                json!({"tache_id": "T2", "phase_parent_id": "P1", "statut": "archived"}),
            ],
        )
        .unwrap_err();

        let errors = err.row_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, RecordKind::Phase);
        assert_eq!(errors[1].kind, RecordKind::Task);
        assert_eq!(errors[1].index, 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = PlanRows::from_json_rows(
            &[
                json!({"phase_id": "P1", "ordre_execution": 1}),
                json!({"phase_id": "P1", "ordre_execution": 2}),
            ],
            &[],
            &[],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ModelError::DuplicateId { kind: RecordKind::Phase, ref id } if id == "P1"
        ));
    }

    #[test]
    fn rejects_fractional_task_orders() {
        let err = PlanRows::from_json_rows(
            &[json!({"phase_id": "P1", "ordre_execution": 1})],
            &[],
            &[
                json!({"tache_id": "T_late", "phase_parent_id": "P1", "ordre_execution": 1.7}),
                json!({"tache_id": "T_early", "phase_parent_id": "P1", "ordre_execution": 1.2}),
            ],
        )
        .unwrap_err();

        let errors = err.row_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == RecordKind::Task));
        assert_eq!(errors[0].index, 0);
        assert_eq!(errors[1].index, 1);
    }

    #[test]
    fn rejects_ids_shared_across_kinds() {
        let err = PlanRows::from_json_rows(
            &[json!({"phase_id": 1, "ordre_execution": 1})],
            &[json!({"jalon_id": 2, "phase_parent_id": 1, "jalon_index": 1})],
            &[json!({"tache_id": 1, "phase_parent_id": 1, "jalon_parent_id": 2})],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ModelError::DuplicateId { kind: RecordKind::Task, ref id } if id == "1"
        ));
    }

    #[test]
    fn null_payload_is_empty() {
        let rows =
            PlanRows::from_json_arrays(&Value::Null, &json!([]), &Value::Null).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn object_payload_is_rejected() {
        let err = PlanRows::from_json_arrays(&json!({}), &json!([]), &json!([])).unwrap_err();
        assert!(matches!(
            err,
            ModelError::NotAnArray { kind: RecordKind::Phase, found: "object" }
        ));
    }
}
