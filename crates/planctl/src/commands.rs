//! Subcommand output

use anyhow::Context;
use plan_hierarchy::{render_tree, PlanSummary};
use plan_model::Status;
use plan_store::ActionPlan;

/// What a subcommand prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Indented tree
    Tree,
    /// Element list as pretty JSON
    Json,
    /// Per-phase progress
    Summary,
}

/// Render `plan` for `kind`; `statuses` filters tree and JSON output
///
/// # Errors
/// Returns error if JSON encoding fails
pub fn render(kind: OutputKind, plan: &ActionPlan, statuses: &[Status]) -> anyhow::Result<String> {
    match kind {
        OutputKind::Tree => Ok(render_tree(&plan.filtered(statuses))),
        OutputKind::Json => {
            let mut out = serde_json::to_string_pretty(&plan.filtered(statuses))
                .context("cannot encode plan elements")?;
            out.push('\n');
            Ok(out)
        }
        OutputKind::Summary => Ok(format_summary(&plan.summary)),
    }
}

/// One line per phase, then plan totals
#[must_use]
pub fn format_summary(summary: &PlanSummary) -> String {
    let mut out = String::new();
    for phase in &summary.phases {
        out.push_str(&format!(
            "{} [{}]: {}/{} tasks done ({}%), {}/{} milestones done\n",
            phase.name,
            phase.status,
            phase.tasks.done,
            phase.tasks.total(),
            phase.completion_percent(),
            phase.milestones.done,
            phase.milestones.total(),
        ));
    }
    out.push_str(&format!(
        "Total: {}/{} tasks done ({}%), {} in progress, {}/{} milestones done\n",
        summary.tasks.done,
        summary.tasks.total(),
        summary.completion_percent(),
        summary.tasks.in_progress,
        summary.milestones.done,
        summary.milestones.total(),
    ));
    out
}
