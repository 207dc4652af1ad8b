//! Progress summaries
//!
//! Counts computed from an already built hierarchy, so orphans dropped by
//! the builder are not counted either.

use crate::element::HierarchicalElement;
use indexmap::IndexMap;
use plan_model::{RecordKind, Status};
use serde::{Deserialize, Serialize};

/// Number of rows per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Rows not started
    pub to_do: usize,
    /// Rows in progress
    pub in_progress: usize,
    /// Rows done
    pub done: usize,
}

impl StatusCounts {
    /// Count one row
    #[inline]
    pub fn record(&mut self, status: Status) {
        match status {
            Status::ToDo => self.to_do += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Done => self.done += 1,
        }
    }

    /// Total rows counted
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }

    /// Share of done rows, rounded down; 0 when nothing was counted
    #[inline]
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        match self.total() {
            0 => 0,
            total => u8::try_from(self.done * 100 / total).unwrap_or(100),
        }
    }
}

/// Progress of one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// Phase identifier
    pub phase_id: String,
    /// Phase name
    pub name: String,
    /// Phase's own status
    pub status: Status,
    /// Milestones of the phase
    pub milestones: StatusCounts,
    /// Tasks of the phase, nested or direct
    pub tasks: StatusCounts,
}

impl PhaseProgress {
    /// Share of done tasks
    #[inline]
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        self.tasks.completion_percent()
    }
}

/// Progress of a whole plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Per-phase progress, in plan order
    pub phases: Vec<PhaseProgress>,
    /// All milestones
    pub milestones: StatusCounts,
    /// All tasks
    pub tasks: StatusCounts,
}

impl PlanSummary {
    /// Summarize a built hierarchy
    #[must_use]
    pub fn from_elements(elements: &[HierarchicalElement]) -> Self {
        let mut phases: IndexMap<&str, PhaseProgress> = IndexMap::new();
        let mut milestones = StatusCounts::default();
        let mut tasks = StatusCounts::default();

        for element in elements {
            match element.element_type {
                RecordKind::Phase => {
                    phases
                        .entry(element.element_id.as_str())
                        .or_insert_with(|| PhaseProgress {
                            phase_id: element.element_id.clone(),
                            name: element.name.clone(),
                            status: element.status,
                            milestones: StatusCounts::default(),
                            tasks: StatusCounts::default(),
                        });
                }
                RecordKind::Milestone => {
                    milestones.record(element.status);
                    if let Some(progress) = parent_progress(&mut phases, element) {
                        progress.milestones.record(element.status);
                    }
                }
                RecordKind::Task => {
                    tasks.record(element.status);
                    if let Some(progress) = parent_progress(&mut phases, element) {
                        progress.tasks.record(element.status);
                    }
                }
            }
        }

        Self {
            phases: phases.into_values().collect(),
            milestones,
            tasks,
        }
    }

    /// Share of done tasks across the plan
    #[inline]
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        self.tasks.completion_percent()
    }
}

fn parent_progress<'m>(
    phases: &'m mut IndexMap<&str, PhaseProgress>,
    element: &HierarchicalElement,
) -> Option<&'m mut PhaseProgress> {
    element
        .parent_phase
        .as_ref()
        .and_then(|phase| phases.get_mut(phase.as_str()))
}
