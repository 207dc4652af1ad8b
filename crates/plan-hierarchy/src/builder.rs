//! Hierarchy assembly
//!
//! Turns the flat phase, milestone and task row sets of one project into a
//! single list ordered by `(phase order, milestone index, task order)`.
//! The tree is fixed at three levels, so assembly is two passes over
//! lookup tables rather than a recursive walk.
//!
//! Rows whose parent cannot be resolved are left out. The drop is
//! reported through [`BuiltHierarchy::warnings`] and never fails the
//! build.

use crate::config::HierarchyConfig;
use crate::diagnostics::OrphanWarning;
use crate::element::HierarchicalElement;
use plan_model::{Milestone, Phase, PlanRows, RecordKind, Task};
use std::collections::{HashMap, HashSet};

/// Output of [`HierarchyBuilder::build`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltHierarchy {
    /// Sorted, flattened plan rows
    pub elements: Vec<HierarchicalElement>,
    /// Rows left out, in detection order
    pub warnings: Vec<OrphanWarning>,
}

impl BuiltHierarchy {
    /// Warnings as display strings
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Check if any row was dropped
    #[inline]
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Discard diagnostics
    #[inline]
    #[must_use]
    pub fn into_elements(self) -> Vec<HierarchicalElement> {
        self.elements
    }
}

/// Plan hierarchy builder
///
/// Stateless; every call rebuilds from its inputs and never mutates them.
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    config: HierarchyConfig,
}

impl HierarchyBuilder {
    /// Create new builder
    #[inline]
    #[must_use]
    pub fn new(config: HierarchyConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Build from validated row sets
    #[inline]
    #[must_use]
    pub fn build_rows(&self, rows: &PlanRows) -> BuiltHierarchy {
        self.build(&rows.phases, &rows.milestones, &rows.tasks)
    }

    /// Build the sorted hierarchy
    ///
    /// # Arguments
    /// * `phases` - Phase rows, any order
    /// * `milestones` - Milestone rows, any order
    /// * `tasks` - Task rows, any order
    ///
    /// # Returns
    /// Elements sorted by [`HierarchicalElement::sort_key`]. The sort is
    /// stable, so equal keys keep emission order: phase, then its
    /// milestones each followed by their tasks, then phase-level tasks.
    #[must_use]
    pub fn build(&self, phases: &[Phase], milestones: &[Milestone], tasks: &[Task]) -> BuiltHierarchy {
        let mut warnings = Vec::new();

        // Ids are unique across kinds; phases claim theirs first
        let mut seen = HashSet::with_capacity(phases.len() + milestones.len() + tasks.len());
        let phases = first_by_id(
            RecordKind::Phase,
            phases,
            |p| p.id.as_str(),
            &mut seen,
            &mut warnings,
        );
        let milestones = first_by_id(
            RecordKind::Milestone,
            milestones,
            |m| m.id.as_str(),
            &mut seen,
            &mut warnings,
        );
        let tasks = first_by_id(
            RecordKind::Task,
            tasks,
            |t| t.id.as_str(),
            &mut seen,
            &mut warnings,
        );

        let phase_by_id: HashMap<&str, &Phase> =
            phases.iter().map(|&p| (p.id.as_str(), p)).collect();

        let mut milestones_by_phase: HashMap<&str, Vec<&Milestone>> = HashMap::new();
        for &milestone in &milestones {
            if phase_by_id.contains_key(milestone.phase_id.as_str()) {
                milestones_by_phase
                    .entry(milestone.phase_id.as_str())
                    .or_default()
                    .push(milestone);
            } else {
                tracing::debug!(
                    "Dropping milestone {}: phase {} not found",
                    milestone.id,
                    milestone.phase_id
                );
                warnings.push(OrphanWarning::MilestoneWithoutPhase {
                    milestone: milestone.id.clone(),
                    phase: milestone.phase_id.clone(),
                });
            }
        }

        let mut tasks_by_milestone: HashMap<&str, Vec<&Task>> = HashMap::new();
        let mut phase_tasks = Vec::new();
        for &task in &tasks {
            match &task.milestone_id {
                Some(milestone_id) => tasks_by_milestone
                    .entry(milestone_id.as_str())
                    .or_default()
                    .push(task),
                None => phase_tasks.push(task),
            }
        }

        let mut elements = Vec::with_capacity(phases.len() + milestones.len() + tasks.len());
        let mut placed_milestones: HashSet<&str> = HashSet::new();

        // Phases, their milestones and milestone tasks
        for &phase in &phases {
            elements.push(HierarchicalElement::from_phase(phase));

            let Some(children) = milestones_by_phase.get(phase.id.as_str()) else {
                continue;
            };
            for &milestone in children {
                elements.push(HierarchicalElement::from_milestone(milestone, phase));
                placed_milestones.insert(milestone.id.as_str());

                for &task in tasks_by_milestone
                    .get(milestone.id.as_str())
                    .map_or(&[][..], Vec::as_slice)
                {
                    elements.push(HierarchicalElement::from_milestone_task(
                        task, milestone, phase,
                    ));
                }
            }
        }

        for &task in &tasks {
            if let Some(milestone_id) = &task.milestone_id {
                if !placed_milestones.contains(milestone_id.as_str()) {
                    tracing::debug!(
                        "Dropping task {}: milestone {} not found",
                        task.id,
                        milestone_id
                    );
                    warnings.push(OrphanWarning::TaskWithoutMilestone {
                        task: task.id.clone(),
                        milestone: milestone_id.clone(),
                    });
                }
            }
        }

        // Tasks attached straight to a phase
        for task in phase_tasks {
            if let Some(&phase) = phase_by_id.get(task.phase_id.as_str()) {
                elements.push(HierarchicalElement::from_phase_task(task, phase));
            } else {
                tracing::debug!("Dropping task {}: phase {} not found", task.id, task.phase_id);
                warnings.push(OrphanWarning::TaskWithoutPhase {
                    task: task.id.clone(),
                    phase: task.phase_id.clone(),
                });
            }
        }

        elements.sort_by_key(HierarchicalElement::sort_key);

        if self.config.log_orphans && !warnings.is_empty() {
            tracing::warn!(
                "Left {} plan rows out of the hierarchy ({} kept)",
                warnings.len(),
                elements.len()
            );
        }

        BuiltHierarchy { elements, warnings }
    }
}

/// Build the sorted hierarchy with default configuration
///
/// Orphans are dropped silently; use [`HierarchyBuilder::build`] to see them.
#[must_use]
pub fn build_hierarchy(
    phases: &[Phase],
    milestones: &[Milestone],
    tasks: &[Task],
) -> Vec<HierarchicalElement> {
    HierarchyBuilder::new(HierarchyConfig::default().with_log_orphans(false))
        .build(phases, milestones, tasks)
        .into_elements()
}

/// Keep the first row of each identifier not already in `seen`
fn first_by_id<'a, T>(
    kind: RecordKind,
    rows: &'a [T],
    id_of: impl Fn(&'a T) -> &'a str,
    seen: &mut HashSet<&'a str>,
    warnings: &mut Vec<OrphanWarning>,
) -> Vec<&'a T> {
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let id = id_of(row);
        if seen.insert(id) {
            kept.push(row);
        } else {
            tracing::debug!("Ignoring duplicate {kind} {id}");
            warnings.push(OrphanWarning::DuplicateElement {
                element_type: kind,
                id: id.to_string(),
            });
        }
    }
    kept
}
