//! Action plan loader
//!
//! Fetches the three row sets of a project, validates them at the
//! boundary and assembles the hierarchy. Nothing is cached: every call is
//! a fresh rebuild from what the repository returns.

use crate::error::StoreError;
use crate::repository::PlanRepository;
use plan_hierarchy::{
    filter_by_status, render_tree, HierarchicalElement, HierarchyBuilder, HierarchyConfig,
    OrphanWarning, PlanSummary,
};
use plan_model::{PlanRows, ProjectId, Status};
use serde::Serialize;

/// Assembled plan of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPlan {
    /// Owning project
    pub project_id: ProjectId,
    /// Sorted, flattened plan rows
    pub elements: Vec<HierarchicalElement>,
    /// Rows left out of the hierarchy
    pub warnings: Vec<OrphanWarning>,
    /// Progress counts
    pub summary: PlanSummary,
}

impl ActionPlan {
    /// Elements matching any of `statuses`, with their ancestors
    #[inline]
    #[must_use]
    pub fn filtered(&self, statuses: &[Status]) -> Vec<HierarchicalElement> {
        filter_by_status(&self.elements, statuses)
    }

    /// Indented text rendering
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        render_tree(&self.elements)
    }

    /// Warnings as display strings
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Loads action plans from a repository
#[derive(Debug)]
pub struct ActionPlanLoader<R> {
    repository: R,
    builder: HierarchyBuilder,
}

impl<R: PlanRepository> ActionPlanLoader<R> {
    /// Create loader with default builder configuration
    #[inline]
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            builder: HierarchyBuilder::default(),
        }
    }

    /// With builder configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: HierarchyConfig) -> Self {
        self.builder = HierarchyBuilder::new(config);
        self
    }

    /// Underlying repository
    #[inline]
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch and validate the rows of `project`
    ///
    /// The three fetches run concurrently.
    ///
    /// # Errors
    /// - Any repository error, unchanged
    /// - [`StoreError::InvalidRows`] if a row fails validation
    pub async fn load_rows(&self, project: &ProjectId) -> Result<PlanRows, StoreError> {
        let (phases, milestones, tasks) = tokio::try_join!(
            self.repository.fetch_phases(project),
            self.repository.fetch_milestones(project),
            self.repository.fetch_tasks(project),
        )?;
        tracing::debug!(
            "Fetched {} phases, {} milestones, {} tasks for project {}",
            phases.len(),
            milestones.len(),
            tasks.len(),
            project
        );

        Ok(PlanRows::from_json_rows(&phases, &milestones, &tasks)?)
    }

    /// Load the assembled plan of `project`
    ///
    /// # Errors
    /// Same as [`ActionPlanLoader::load_rows`]
    pub async fn load(&self, project: &ProjectId) -> Result<ActionPlan, StoreError> {
        tracing::info!("Loading action plan for project {}", project);

        let rows = self.load_rows(project).await?;
        let built = self.builder.build_rows(&rows);
        let summary = PlanSummary::from_elements(&built.elements);

        tracing::info!(
            "Action plan for project {}: {} elements, {} rows left out",
            project,
            built.elements.len(),
            built.warnings.len()
        );

        Ok(ActionPlan {
            project_id: project.clone(),
            elements: built.elements,
            warnings: built.warnings,
            summary,
        })
    }
}
