//! Plan hierarchy
//!
//! Rebuilds the phase → milestone → task tree of an action plan from three
//! independently fetched row sets and flattens it into one sorted list.
//!
//! # Overview
//!
//! - **HierarchyBuilder**: the assembly routine, with orphan diagnostics
//! - **HierarchicalElement**: one rendered row, carrying level and sort keys
//! - **filter_by_status**: status filter that keeps ancestors attached
//! - **PlanSummary**: per-phase progress counts
//! - **render_tree**: indented text rendering
//!
//! # Example
//!
//! ```rust
//! use plan_hierarchy::build_hierarchy;
//! use plan_model::{Milestone, Phase, Task};
//!
//! let phases = vec![Phase::new("P1", 1, "Discovery")];
//! let milestones = vec![Milestone::new("J1", "P1", 1, "Interviews done")];
//! let tasks = vec![Task::new("T1", "P1", 1, "Call ten users").in_milestone("J1")];
//!
//! let elements = build_hierarchy(&phases, &milestones, &tasks);
//! let levels: Vec<u8> = elements.iter().map(|e| e.level).collect();
//! assert_eq!(levels, vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod element;
pub mod filter;
pub mod render;
pub mod summary;

// Re-exports
pub use builder::{build_hierarchy, BuiltHierarchy, HierarchyBuilder};
pub use config::HierarchyConfig;
pub use diagnostics::OrphanWarning;
pub use element::{normalize_text, HierarchicalElement, SortKey};
pub use filter::filter_by_status;
pub use render::render_tree;
pub use summary::{PhaseProgress, PlanSummary, StatusCounts};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for hierarchy assembly
    pub use crate::{
        build_hierarchy, filter_by_status, render_tree, BuiltHierarchy, HierarchicalElement,
        HierarchyBuilder, HierarchyConfig, OrphanWarning, PlanSummary,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
