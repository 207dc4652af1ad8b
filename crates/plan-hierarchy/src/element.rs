//! Flattened plan rows
//!
//! A [`HierarchicalElement`] is what the rendering layer consumes: one row
//! per phase, milestone or task, with its nesting level and the composite
//! key that fixes its position.

use plan_model::{Criticality, Milestone, MilestoneId, Phase, PhaseId, RecordKind, Status, Task};
use serde::{Deserialize, Serialize};

/// Composite ordering key `(primary, secondary, tertiary)`
pub type SortKey = (i64, i64, i64);

/// One row of the flattened plan tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalElement {
    /// Source record identifier
    pub element_id: String,
    /// Source record kind
    pub element_type: RecordKind,
    /// Nesting depth: 0 phase, 1 milestone or phase-level task, 2 milestone task
    pub level: u8,
    /// Display name
    pub name: String,
    /// Objective or description, whitespace-normalized
    pub objective: String,
    /// Duration text
    pub duration: String,
    /// Period text
    pub period: String,
    /// Progress status
    pub status: Status,
    /// Milestone criticality
    pub criticality: Option<Criticality>,
    /// Task priority label
    pub priority: Option<String>,
    /// Responsible party
    pub responsible: Option<String>,
    /// Owning phase, absent on phases
    pub parent_phase: Option<PhaseId>,
    /// Owning milestone, present on milestone tasks only
    pub parent_milestone: Option<MilestoneId>,
    /// Phase execution order
    pub sort_primary: i64,
    /// Milestone index, or own order for phase-level tasks
    pub sort_secondary: i64,
    /// Task order inside a milestone
    pub sort_tertiary: i64,
}

impl HierarchicalElement {
    /// Level-0 element for a phase
    #[must_use]
    pub fn from_phase(phase: &Phase) -> Self {
        Self {
            element_id: phase.id.to_string(),
            element_type: RecordKind::Phase,
            level: 0,
            name: phase.name.clone(),
            objective: normalize_text(&phase.objective),
            duration: phase.duration.clone(),
            period: phase.period.clone(),
            status: phase.status,
            criticality: None,
            priority: None,
            responsible: None,
            parent_phase: None,
            parent_milestone: None,
            sort_primary: phase.execution_order,
            sort_secondary: 0,
            sort_tertiary: 0,
        }
    }

    /// Level-1 element for a milestone of `phase`
    #[must_use]
    pub fn from_milestone(milestone: &Milestone, phase: &Phase) -> Self {
        Self {
            element_id: milestone.id.to_string(),
            element_type: RecordKind::Milestone,
            level: 1,
            name: milestone.name.clone(),
            objective: normalize_text(&milestone.objective),
            duration: milestone.duration.clone(),
            period: milestone.period.clone(),
            status: milestone.status,
            criticality: milestone.criticality,
            priority: None,
            responsible: non_blank(&milestone.validation_owner),
            parent_phase: Some(phase.id.clone()),
            parent_milestone: None,
            sort_primary: phase.execution_order,
            sort_secondary: milestone.index,
            sort_tertiary: 0,
        }
    }

    /// Level-2 element for a task nested under `milestone`
    #[must_use]
    pub fn from_milestone_task(task: &Task, milestone: &Milestone, phase: &Phase) -> Self {
        Self {
            level: 2,
            parent_phase: Some(phase.id.clone()),
            parent_milestone: Some(milestone.id.clone()),
            sort_primary: phase.execution_order,
            sort_secondary: milestone.index,
            sort_tertiary: task.execution_order,
            ..Self::task_body(task)
        }
    }

    /// Level-1 element for a task attached directly to `phase`
    #[must_use]
    pub fn from_phase_task(task: &Task, phase: &Phase) -> Self {
        Self {
            level: 1,
            parent_phase: Some(phase.id.clone()),
            parent_milestone: None,
            sort_primary: phase.execution_order,
            sort_secondary: task.execution_order,
            sort_tertiary: 0,
            ..Self::task_body(task)
        }
    }

    fn task_body(task: &Task) -> Self {
        Self {
            element_id: task.id.to_string(),
            element_type: RecordKind::Task,
            level: 0,
            name: task.name.clone(),
            objective: normalize_text(&task.description),
            duration: task.duration.clone(),
            period: task.period.clone(),
            status: task.status,
            criticality: None,
            priority: non_blank(&task.priority),
            responsible: join_owners(&task.owners),
            parent_phase: None,
            parent_milestone: None,
            sort_primary: 0,
            sort_secondary: 0,
            sort_tertiary: 0,
        }
    }

    /// Ordering key
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        (self.sort_primary, self.sort_secondary, self.sort_tertiary)
    }

    /// Check if element is a phase
    #[inline]
    #[must_use]
    pub fn is_phase(&self) -> bool {
        self.element_type == RecordKind::Phase
    }

    /// Check if element is a milestone
    #[inline]
    #[must_use]
    pub fn is_milestone(&self) -> bool {
        self.element_type == RecordKind::Milestone
    }

    /// Check if element is a task
    #[inline]
    #[must_use]
    pub fn is_task(&self) -> bool {
        self.element_type == RecordKind::Task
    }
}

/// Trim and collapse whitespace runs into single spaces
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn join_owners(owners: &[String]) -> Option<String> {
    let names: Vec<&str> = owners
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}
