//! Orphan diagnostics
//!
//! Rows whose parent cannot be resolved never reach the output. Each drop
//! is recorded here so callers can surface it if they want to.

use plan_model::{MilestoneId, PhaseId, RecordKind, TaskId};
use serde::Serialize;
use std::fmt;

/// A row left out of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrphanWarning {
    /// Milestone points at a phase absent from the fetch
    MilestoneWithoutPhase {
        /// Dropped milestone
        milestone: MilestoneId,
        /// Missing phase
        phase: PhaseId,
    },

    /// Task points at a milestone absent from the hierarchy
    TaskWithoutMilestone {
        /// Dropped task
        task: TaskId,
        /// Missing or dropped milestone
        milestone: MilestoneId,
    },

    /// Phase-level task points at a phase absent from the fetch
    TaskWithoutPhase {
        /// Dropped task
        task: TaskId,
        /// Missing phase
        phase: PhaseId,
    },

    /// Identifier seen more than once; only the first row is kept
    DuplicateElement {
        /// Record kind
        element_type: RecordKind,
        /// Repeated identifier
        id: String,
    },
}

impl OrphanWarning {
    /// Kind of the dropped row
    #[inline]
    #[must_use]
    pub fn dropped_kind(&self) -> RecordKind {
        match self {
            Self::MilestoneWithoutPhase { .. } => RecordKind::Milestone,
            Self::TaskWithoutMilestone { .. } | Self::TaskWithoutPhase { .. } => RecordKind::Task,
            Self::DuplicateElement { element_type, .. } => *element_type,
        }
    }
}

impl fmt::Display for OrphanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MilestoneWithoutPhase { milestone, phase } => {
                write!(f, "milestone {milestone} dropped: phase {phase} not found")
            }
            Self::TaskWithoutMilestone { task, milestone } => {
                write!(f, "task {task} dropped: milestone {milestone} not found")
            }
            Self::TaskWithoutPhase { task, phase } => {
                write!(f, "task {task} dropped: phase {phase} not found")
            }
            Self::DuplicateElement { element_type, id } => {
                write!(f, "duplicate {element_type} {id} ignored")
            }
        }
    }
}
