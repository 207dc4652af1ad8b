//! Output tests for planctl subcommands

use plan_model::{ProjectId, Status};
use plan_store::{ActionPlan, ActionPlanLoader, InMemoryPlanRepository, ProjectSnapshot};
use plan_test_utils::*;
use planctl::{render, OutputKind, PlanctlConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

async fn sample_plan() -> ActionPlan {
    let snapshot = ProjectSnapshot::from_rows(SAMPLE_PROJECT, &sample_rows()).unwrap();
    ActionPlanLoader::new(InMemoryPlanRepository::new().with_snapshot(snapshot))
        .load(&ProjectId::new(SAMPLE_PROJECT))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_tree_output() {
    let plan = sample_plan().await;
    let out = render(OutputKind::Tree, &plan, &[]).unwrap();

    let expected = "\
[In progress] Validation
  [Done] Entretiens terminés (Critical) - Fondateur
    [Done] Mener 20 entretiens - Ana, Léo
    [Done] Synthétiser les retours
  [To do] Prototype testé (High)
    [In progress] Construire la maquette
  [To do] Préparer le pitch
[To do] Commercialisation
  [To do] Premier contrat
    [To do] Prospecter
";
    assert_eq!(out, expected);
}

#[tokio::test]
async fn test_tree_output_filtered() {
    let plan = sample_plan().await;
    let out = render(OutputKind::Tree, &plan, &[Status::Done]).unwrap();
    assert_eq!(out.lines().count(), 4);
    assert!(out.starts_with("[In progress] Validation\n"));
}

#[tokio::test]
async fn test_json_output() {
    let plan = sample_plan().await;
    let out = render(OutputKind::Json, &plan, &[]).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let elements = value.as_array().unwrap();
    let ids: Vec<_> = elements
        .iter()
        .map(|e| e["element_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, sample_order());
    assert_eq!(elements[0]["element_type"], "phase");
    assert_eq!(elements[0]["level"], 0);
    assert_eq!(elements[2]["parent_milestone"], "J1");
}

#[tokio::test]
async fn test_summary_output() {
    let plan = sample_plan().await;
    let out = render(OutputKind::Summary, &plan, &[Status::Done]).unwrap();
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Validation [In progress]: 2/4 tasks done (50%), 1/2 milestones done",
            "Commercialisation [To do]: 0/1 tasks done (0%), 0/1 milestones done",
            "Total: 2/5 tasks done (40%), 1 in progress, 1/3 milestones done",
        ]
    );
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_warnings = false\n[hierarchy]\nlog_orphans = false").unwrap();

    let config = PlanctlConfig::load(Some(file.path())).unwrap();
    assert!(!config.show_warnings);
    assert!(!config.hierarchy.log_orphans);
}

#[test]
fn test_missing_config_file() {
    let err = PlanctlConfig::load(Some(std::path::Path::new("/nonexistent/planctl.toml")))
        .unwrap_err();
    assert!(err.to_string().contains("cannot read config"));
}

fn planctl() -> std::process::Command {
    std::process::Command::new(env!("CARGO_BIN_EXE_planctl"))
}

#[test]
fn test_binary_logs_and_warns() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sample_snapshot_json()).unwrap();

    let output = planctl()
        .args(["tree", "--snapshot"])
        .arg(file.path())
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.starts_with("[In progress] Validation\n"), "{stdout}");
    assert!(stderr.contains("Loaded snapshot"), "{stderr}");
    assert!(
        stderr.contains("warning: milestone J9 dropped: phase P404 not found"),
        "{stderr}"
    );
}

#[test]
fn test_binary_without_subcommand_fails() {
    let output = planctl().output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("panicked"), "{stderr}");
}
