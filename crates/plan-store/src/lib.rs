//! Plan storage
//!
//! The seam between hosted storage and the hierarchy builder:
//! - [`PlanRepository`]: async source of raw rows, injected by the caller
//! - [`InMemoryPlanRepository`]: repository over project snapshots
//! - [`ProjectSnapshot`]: JSON document holding one project's rows
//! - [`ActionPlanLoader`]: fetch, validate, build and summarize
//!
//! # Example
//!
//! ```rust,ignore
//! use plan_store::{ActionPlanLoader, InMemoryPlanRepository, ProjectSnapshot};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = ProjectSnapshot::load("plan.json").await?;
//! let project = snapshot.project_id.clone();
//! let loader = ActionPlanLoader::new(InMemoryPlanRepository::new().with_snapshot(snapshot));
//!
//! let plan = loader.load(&project).await?;
//! println!("{}", plan.render());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod memory;
pub mod repository;
pub mod snapshot;

// Re-exports
pub use error::StoreError;
pub use loader::{ActionPlan, ActionPlanLoader};
pub use memory::InMemoryPlanRepository;
pub use repository::PlanRepository;
pub use snapshot::ProjectSnapshot;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
