//! Plan repository trait
//!
//! Rows come back untyped, the way a hosted database returns them; the
//! loader validates them before use. Implementations own their lifecycle
//! and are passed in explicitly, so no process-wide cache is involved.

use crate::error::StoreError;
use async_trait::async_trait;
use plan_model::ProjectId;
use serde_json::Value;
use std::sync::Arc;

/// Source of plan rows scoped to a project
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Phase rows of `project`
    async fn fetch_phases(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError>;

    /// Milestone rows of `project`
    async fn fetch_milestones(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError>;

    /// Task rows of `project`
    async fn fetch_tasks(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError>;
}

#[async_trait]
impl<R: PlanRepository + ?Sized> PlanRepository for Arc<R> {
    async fn fetch_phases(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        (**self).fetch_phases(project).await
    }

    async fn fetch_milestones(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        (**self).fetch_milestones(project).await
    }

    async fn fetch_tasks(&self, project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        (**self).fetch_tasks(project).await
    }
}
