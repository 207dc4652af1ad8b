//! Testing utilities for the action plan workspace
//!
//! Shared fixtures: typed records and raw storage rows.

#![allow(missing_docs)]

use plan_model::{Criticality, Milestone, Phase, PlanRows, Status, Task};
use serde_json::{json, Value};

pub const SAMPLE_PROJECT: &str = "proj-demo";

pub fn phase(id: &str, order: i64) -> Phase {
    Phase::new(id, order, format!("Phase {id}"))
}

pub fn milestone(id: &str, phase_id: &str, index: i64) -> Milestone {
    Milestone::new(id, phase_id, index, format!("Milestone {id}"))
}

pub fn milestone_task(id: &str, phase_id: &str, milestone_id: &str, order: i64) -> Task {
    Task::new(id, phase_id, order, format!("Task {id}")).in_milestone(milestone_id)
}

pub fn phase_task(id: &str, phase_id: &str, order: i64) -> Task {
    Task::new(id, phase_id, order, format!("Task {id}"))
}

/// Two phases supplied out of order, with nested and direct tasks
pub fn sample_rows() -> PlanRows {
    PlanRows::new(
        vec![
            Phase::new("P2", 2, "Commercialisation")
                .with_objective("Signer les premiers clients")
                .with_schedule("6", "S2 2025"),
            Phase::new("P1", 1, "Validation")
                .with_objective("Valider le problème")
                .with_schedule("3", "T1 2025")
                .with_status(Status::InProgress),
        ],
        vec![
            Milestone::new("J2", "P1", 2, "Prototype testé").with_criticality(Criticality::High),
            Milestone::new("J1", "P1", 1, "Entretiens terminés")
                .with_criticality(Criticality::Critical)
                .with_status(Status::Done)
                .with_validation_owner("Fondateur"),
            Milestone::new("J3", "P2", 1, "Premier contrat"),
        ],
        vec![
            Task::new("T2", "P1", 2, "Synthétiser les retours")
                .in_milestone("J1")
                .with_status(Status::Done),
            Task::new("T1", "P1", 1, "Mener 20 entretiens")
                .in_milestone("J1")
                .with_status(Status::Done)
                .with_owner("Ana")
                .with_owner("Léo"),
            Task::new("T3", "P1", 1, "Construire la maquette")
                .in_milestone("J2")
                .with_status(Status::InProgress),
            Task::new("T4", "P1", 3, "Préparer le pitch").with_priority("Haute"),
            Task::new("T5", "P2", 1, "Prospecter").in_milestone("J3"),
        ],
    )
}

/// Element ids of [`sample_rows`] in expected output order
pub fn sample_order() -> Vec<&'static str> {
    vec!["P1", "J1", "T1", "T2", "J2", "T3", "T4", "P2", "J3", "T5"]
}

/// Raw storage rows for phases, milestones and tasks, with sparse columns
pub fn sample_json_rows() -> (Vec<Value>, Vec<Value>, Vec<Value>) {
    let phases = vec![
        json!({"phase_id": "P1", "ordre_execution": 1, "nom_phase": "Validation",
               "objectif": "Valider le problème", "duree_mois": 3, "periode": null,
               "statut": "En cours"}),
        json!({"phase_id": "P2", "ordre_execution": "2", "nom_phase": "Commercialisation"}),
    ];
    let milestones = vec![
        json!({"jalon_id": "J1", "phase_parent_id": "P1", "jalon_index": 1,
               "nom_jalon": "Entretiens terminés", "criticite": "Critique",
               "statut": "Terminé", "responsable_validation": "Fondateur"}),
        json!({"jalon_id": "J9", "phase_parent_id": "P404", "jalon_index": 1,
               "nom_jalon": "Jalon orphelin"}),
    ];
    let tasks = vec![
        json!({"tache_id": "T1", "phase_parent_id": "P1", "jalon_parent_id": "J1",
               "ordre_execution": 1, "nom_tache": "Mener 20 entretiens",
               "statut": "Terminé", "responsables": ["Ana", "Léo"]}),
        json!({"tache_id": "T4", "phase_parent_id": "P1", "jalon_parent_id": null,
               "ordre_execution": 3, "nom_tache": "Préparer le pitch", "priorite": "Haute"}),
        json!({"tache_id": "T9", "phase_parent_id": "P1", "jalon_parent_id": "J9",
               "ordre_execution": 1, "nom_tache": "Tâche orpheline"}),
    ];
    (phases, milestones, tasks)
}

/// Expected element ids of [`sample_json_rows`]
pub fn sample_json_order() -> Vec<&'static str> {
    vec!["P1", "J1", "T1", "T4", "P2"]
}

/// Snapshot document for [`sample_json_rows`]
pub fn sample_snapshot_json() -> Value {
    let (phases, milestones, tasks) = sample_json_rows();
    json!({
        "project_id": SAMPLE_PROJECT,
        "phases": phases,
        "milestones": milestones,
        "tasks": tasks,
    })
}
