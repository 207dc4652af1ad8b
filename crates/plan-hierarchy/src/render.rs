//! Indented text rendering

use crate::element::HierarchicalElement;

/// Render one line per element, indented two spaces per level
///
/// Lines read `[status] name`, followed by the criticality of milestones
/// and the responsible party when known.
#[must_use]
pub fn render_tree(elements: &[HierarchicalElement]) -> String {
    let mut out = String::new();
    for element in elements {
        let indent = "  ".repeat(usize::from(element.level));
        out.push_str(&format!("{indent}[{}] ", element.status));
        if element.name.trim().is_empty() {
            out.push_str(&format!("{} {}", element.element_type, element.element_id));
        } else {
            out.push_str(element.name.trim());
        }
        if let Some(criticality) = element.criticality {
            out.push_str(&format!(" ({criticality})"));
        }
        if let Some(responsible) = &element.responsible {
            out.push_str(" - ");
            out.push_str(responsible);
        }
        out.push('\n');
    }
    out
}
