//! Loader tests against in-memory and failing repositories

use async_trait::async_trait;
use plan_model::{ProjectId, Status};
use plan_store::{ActionPlanLoader, InMemoryPlanRepository, PlanRepository, ProjectSnapshot, StoreError};
use plan_test_utils::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn ids(plan: &plan_store::ActionPlan) -> Vec<&str> {
    plan.elements.iter().map(|e| e.element_id.as_str()).collect()
}

/// Repository whose task fetch always fails
#[derive(Debug, Default)]
struct FlakyRepository {
    calls: AtomicUsize,
}

#[async_trait]
impl PlanRepository for FlakyRepository {
    async fn fetch_phases(&self, _project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn fetch_milestones(&self, _project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn fetch_tasks(&self, _project: &ProjectId) -> Result<Vec<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend("connection reset".to_string()))
    }
}

#[tokio::test]
async fn test_loads_sample_snapshot() {
    let snapshot: ProjectSnapshot = serde_json::from_value(sample_snapshot_json()).unwrap();
    let loader = ActionPlanLoader::new(InMemoryPlanRepository::new().with_snapshot(snapshot));

    let plan = loader.load(&ProjectId::new(SAMPLE_PROJECT)).await.unwrap();

    assert_eq!(ids(&plan), sample_json_order());
    assert_eq!(
        plan.warning_messages(),
        vec![
            "milestone J9 dropped: phase P404 not found".to_string(),
            "task T9 dropped: milestone J9 not found".to_string(),
        ]
    );
    assert_eq!(plan.summary.tasks.total(), 2);
    assert_eq!(plan.summary.tasks.done, 1);
}

#[tokio::test]
async fn test_typed_rows_snapshot_matches_builder() {
    let rows = sample_rows();
    let snapshot = ProjectSnapshot::from_rows("typed", &rows).unwrap();
    let loader = ActionPlanLoader::new(InMemoryPlanRepository::new().with_snapshot(snapshot));

    let plan = loader.load(&ProjectId::new("typed")).await.unwrap();
    assert_eq!(ids(&plan), sample_order());

    let in_progress = plan.filtered(&[Status::InProgress]);
    let kept: Vec<_> = in_progress.iter().map(|e| e.element_id.as_str()).collect();
    assert_eq!(kept, vec!["P1", "J2", "T3"]);
}

#[tokio::test]
async fn test_backend_error_propagates() {
    let repo = Arc::new(FlakyRepository::default());
    let loader = ActionPlanLoader::new(Arc::clone(&repo));

    let err = loader.load(&ProjectId::new("any")).await.unwrap_err();

    assert!(err.is_retryable());
    assert!(err.to_string().contains("connection reset"));
    assert!(repo.calls.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn test_reload_is_fresh() {
    let repo = Arc::new(InMemoryPlanRepository::new());
    let loader = ActionPlanLoader::new(Arc::clone(&repo));
    let project = ProjectId::new(SAMPLE_PROJECT);

    assert!(loader.load(&project).await.unwrap().elements.is_empty());

    let snapshot: ProjectSnapshot = serde_json::from_value(sample_snapshot_json()).unwrap();
    repo.insert_snapshot(snapshot);

    let first = loader.load(&project).await.unwrap();
    let second = loader.load(&project).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.elements.len(), sample_json_order().len());
}

#[tokio::test]
async fn test_snapshot_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sample_snapshot_json()).unwrap();

    let snapshot = ProjectSnapshot::load(file.path()).await.unwrap();
    assert_eq!(snapshot.project_id.as_str(), SAMPLE_PROJECT);
    assert_eq!(snapshot.total_rows(), 7);
}
