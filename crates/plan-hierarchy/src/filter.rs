//! Status filtering
//!
//! Filtering a flattened tree row by row would leave tasks without their
//! phase header. The filter here keeps the ancestors of every match.

use crate::element::HierarchicalElement;
use plan_model::{RecordKind, Status};
use std::collections::HashSet;

/// Keep elements whose status is in `statuses`, plus their ancestors
///
/// Order is preserved. An empty `statuses` keeps everything.
#[must_use]
pub fn filter_by_status(
    elements: &[HierarchicalElement],
    statuses: &[Status],
) -> Vec<HierarchicalElement> {
    if statuses.is_empty() {
        return elements.to_vec();
    }

    let mut keep: HashSet<(RecordKind, &str)> = HashSet::new();
    for element in elements.iter().filter(|e| statuses.contains(&e.status)) {
        keep.insert((element.element_type, element.element_id.as_str()));
        if let Some(phase) = &element.parent_phase {
            keep.insert((RecordKind::Phase, phase.as_str()));
        }
        if let Some(milestone) = &element.parent_milestone {
            keep.insert((RecordKind::Milestone, milestone.as_str()));
        }
    }

    elements
        .iter()
        .filter(|e| keep.contains(&(e.element_type, e.element_id.as_str())))
        .cloned()
        .collect()
}
