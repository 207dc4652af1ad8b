//! In-memory plan repository
//!
//! Holds one snapshot per project in a concurrent map. Used by the CLI and
//! by tests; each instance is independent, so tests never share state.

use crate::error::StoreError;
use crate::repository::PlanRepository;
use crate::snapshot::ProjectSnapshot;
use async_trait::async_trait;
use dashmap::DashMap;
use plan_model::ProjectId;
use serde_json::Value;

/// Repository over in-memory project snapshots
#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    projects: DashMap<ProjectId, ProjectSnapshot>,
}

impl InMemoryPlanRepository {
    /// Create empty repository
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With snapshot
    #[inline]
    #[must_use]
    pub fn with_snapshot(self, snapshot: ProjectSnapshot) -> Self {
        self.insert_snapshot(snapshot);
        self
    }

    /// Insert or replace a project's snapshot, returning the previous one
    pub fn insert_snapshot(&self, snapshot: ProjectSnapshot) -> Option<ProjectSnapshot> {
        self.projects.insert(snapshot.project_id.clone(), snapshot)
    }

    /// Remove a project
    pub fn remove_project(&self, project: &ProjectId) -> Option<ProjectSnapshot> {
        self.projects.remove(project).map(|(_, snapshot)| snapshot)
    }

    /// Known projects, sorted
    #[must_use]
    pub fn project_ids(&self) -> Vec<ProjectId> {
        let mut ids: Vec<_> = self.projects.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if no project is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn rows_of(
        &self,
        project: &ProjectId,
        select: impl Fn(&ProjectSnapshot) -> &Vec<Value>,
    ) -> Vec<Value> {
        // A project without a plan yet has no rows
        self.projects
            .get(project)
            .map(|snapshot| select(snapshot.value()).clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn fetch_phases(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        Ok(self.rows_of(project, |s| &s.phases))
    }

    async fn fetch_milestones(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        Ok(self.rows_of(project, |s| &s.milestones))
    }

    async fn fetch_tasks(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        Ok(self.rows_of(project, |s| &s.tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_scoped_to_project() {
        let repo = InMemoryPlanRepository::new()
            .with_snapshot(ProjectSnapshot::new("a").with_rows(
                vec![json!({"phase_id": "P1"})],
                vec![],
                vec![],
            ))
            .with_snapshot(ProjectSnapshot::new("b"));

        let a = ProjectId::new("a");
        let b = ProjectId::new("b");
        assert_eq!(repo.fetch_phases(&a).await.unwrap().len(), 1);
        assert!(repo.fetch_phases(&b).await.unwrap().is_empty());
        assert_eq!(repo.project_ids(), vec![a, b]);
    }

    #[tokio::test]
    async fn unknown_project_is_empty() {
        let repo = InMemoryPlanRepository::new();
        let tasks = repo.fetch_tasks(&ProjectId::new("none")).await.unwrap();
        assert!(tasks.is_empty());
        assert!(repo.is_empty());
    }

    #[test]
    fn insert_replaces_and_remove() {
        let repo = InMemoryPlanRepository::new();
        assert!(repo.insert_snapshot(ProjectSnapshot::new("a")).is_none());
        assert!(repo.insert_snapshot(ProjectSnapshot::new("a")).is_some());
        assert_eq!(repo.len(), 1);
        assert!(repo.remove_project(&ProjectId::new("a")).is_some());
        assert!(repo.is_empty());
    }
}
