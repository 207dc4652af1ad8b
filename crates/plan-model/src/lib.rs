//! Action plan model
//!
//! Typed rows for the three record kinds that make up an action plan.
//!
//! # Overview
//!
//! - **Phase**: top-level plan segment with an execution order
//! - **Milestone** (`jalon`): checkpoint inside a phase, carrying criticality
//! - **Task** (`tache`): leaf unit of work, optionally grouped under a milestone
//! - **PlanRows**: the three row sets of one project, validated at the boundary
//!
//! Field names on the wire are the storage column names (`phase_id`,
//! `ordre_execution`, `jalon_parent_id`, ...). Missing optional columns
//! decode to empty values instead of failing.
//!
//! # Example
//!
//! ```rust
//! use plan_model::PlanRows;
//! use serde_json::json;
//!
//! let rows = PlanRows::from_json_rows(
//!     &[json!({"phase_id": "P1", "ordre_execution": 1, "nom_phase": "Launch"})],
//!     &[json!({"jalon_id": "J1", "phase_parent_id": "P1", "jalon_index": 1})],
//!     &[json!({"tache_id": "T1", "phase_parent_id": "P1", "jalon_parent_id": "J1"})],
//! )
//! .unwrap();
//!
//! assert_eq!(rows.total_rows(), 3);
//! assert_eq!(rows.phases[0].name, "Launch");
//! ```

#![warn(missing_docs)]

pub mod de;
pub mod error;
pub mod ids;
pub mod records;
pub mod rows;
pub mod status;

// Re-exports
pub use error::{ModelError, RowError, UnknownLabel};
pub use ids::{MilestoneId, PhaseId, ProjectId, TaskId};
pub use records::{Milestone, Phase, RecordKind, Task};
pub use rows::PlanRows;
pub use status::{Criticality, Status};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for plan records
    pub use crate::{
        Criticality, Milestone, MilestoneId, Phase, PhaseId, PlanRows, ProjectId, RecordKind,
        Status, Task, TaskId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
