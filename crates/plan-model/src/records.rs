//! Plan records
//!
//! One struct per storage table. Serde names follow the storage columns so
//! rows decode directly from the database payload.

use crate::de;
use crate::ids::{MilestoneId, PhaseId, TaskId};
use crate::status::{Criticality, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Phase row
    Phase,
    /// Milestone row
    Milestone,
    /// Task row
    Task,
}

impl RecordKind {
    /// Lowercase tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Phase => "phase",
            RecordKind::Milestone => "milestone",
            RecordKind::Task => "task",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level plan segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase identifier
    #[serde(rename = "phase_id")]
    pub id: PhaseId,
    /// Execution order among phases
    #[serde(rename = "ordre_execution", default, deserialize_with = "de::order")]
    pub execution_order: i64,
    /// Display name
    #[serde(rename = "nom_phase", alias = "nom", default, deserialize_with = "de::text")]
    pub name: String,
    /// Objective text
    #[serde(rename = "objectif", default, deserialize_with = "de::text")]
    pub objective: String,
    /// Duration, usually in months
    #[serde(rename = "duree_mois", default, deserialize_with = "de::text")]
    pub duration: String,
    /// Calendar period
    #[serde(rename = "periode", default, deserialize_with = "de::text")]
    pub period: String,
    /// Progress status
    #[serde(rename = "statut", alias = "status", default)]
    pub status: Status,
}

impl Phase {
    /// Create phase with defaults for optional columns
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<PhaseId>, execution_order: i64, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            execution_order,
            name: name.into(),
            objective: String::new(),
            duration: String::new(),
            period: String::new(),
            status: Status::default(),
        }
    }

    /// With objective
    #[inline]
    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// With duration and period
    #[inline]
    #[must_use]
    pub fn with_schedule(mut self, duration: impl Into<String>, period: impl Into<String>) -> Self {
        self.duration = duration.into();
        self.period = period.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Checkpoint inside a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone identifier
    #[serde(rename = "jalon_id")]
    pub id: MilestoneId,
    /// Owning phase
    #[serde(rename = "phase_parent_id")]
    pub phase_id: PhaseId,
    /// Position within the phase
    #[serde(rename = "jalon_index", default, deserialize_with = "de::order")]
    pub index: i64,
    /// Display name
    #[serde(rename = "nom_jalon", alias = "nom", default, deserialize_with = "de::text")]
    pub name: String,
    /// Objective text
    #[serde(rename = "objectif", default, deserialize_with = "de::text")]
    pub objective: String,
    /// Criticality label
    #[serde(
        rename = "criticite",
        alias = "criticality",
        default,
        deserialize_with = "de::optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub criticality: Option<Criticality>,
    /// Progress status
    #[serde(rename = "statut", alias = "status", default)]
    pub status: Status,
    /// Person or role validating the milestone
    #[serde(rename = "responsable_validation", default, deserialize_with = "de::text")]
    pub validation_owner: String,
    /// Duration
    #[serde(rename = "duree", default, deserialize_with = "de::text")]
    pub duration: String,
    /// Calendar period
    #[serde(rename = "periode", default, deserialize_with = "de::text")]
    pub period: String,
}

impl Milestone {
    /// Create milestone with defaults for optional columns
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<MilestoneId>,
        phase_id: impl Into<PhaseId>,
        index: i64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            phase_id: phase_id.into(),
            index,
            name: name.into(),
            objective: String::new(),
            criticality: None,
            status: Status::default(),
            validation_owner: String::new(),
            duration: String::new(),
            period: String::new(),
        }
    }

    /// With objective
    #[inline]
    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// With criticality
    #[inline]
    #[must_use]
    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = Some(criticality);
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// With validation owner
    #[inline]
    #[must_use]
    pub fn with_validation_owner(mut self, owner: impl Into<String>) -> Self {
        self.validation_owner = owner.into();
        self
    }
}

/// Leaf unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier
    #[serde(rename = "tache_id")]
    pub id: TaskId,
    /// Owning milestone, absent for phase-level tasks
    #[serde(
        rename = "jalon_parent_id",
        default,
        deserialize_with = "de::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub milestone_id: Option<MilestoneId>,
    /// Owning phase
    #[serde(rename = "phase_parent_id")]
    pub phase_id: PhaseId,
    /// Execution order within the milestone or phase
    #[serde(rename = "ordre_execution", default, deserialize_with = "de::order")]
    pub execution_order: i64,
    /// Display name
    #[serde(rename = "nom_tache", alias = "nom", default, deserialize_with = "de::text")]
    pub name: String,
    /// Description text
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    /// Progress status
    #[serde(rename = "statut", alias = "status", default)]
    pub status: Status,
    /// Priority label
    #[serde(rename = "priorite", alias = "priority", default, deserialize_with = "de::text")]
    pub priority: String,
    /// People or roles in charge
    #[serde(rename = "responsables", default, deserialize_with = "de::string_list")]
    pub owners: Vec<String>,
    /// Duration
    #[serde(rename = "duree", default, deserialize_with = "de::text")]
    pub duration: String,
    /// Calendar period
    #[serde(rename = "periode", default, deserialize_with = "de::text")]
    pub period: String,
}

impl Task {
    /// Create phase-level task (no milestone)
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        phase_id: impl Into<PhaseId>,
        execution_order: i64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            milestone_id: None,
            phase_id: phase_id.into(),
            execution_order,
            name: name.into(),
            description: String::new(),
            status: Status::default(),
            priority: String::new(),
            owners: Vec::new(),
            duration: String::new(),
            period: String::new(),
        }
    }

    /// Attach to milestone
    #[inline]
    #[must_use]
    pub fn in_milestone(mut self, milestone_id: impl Into<MilestoneId>) -> Self {
        self.milestone_id = Some(milestone_id.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// With priority label
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Add an owner
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owners.push(owner.into());
        self
    }
}
