//! planctl binary entry point

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use plan_model::Status;
use plan_store::{ActionPlanLoader, InMemoryPlanRepository, ProjectSnapshot};
use planctl::{logging, render, OutputKind, PlanctlConfig};
use std::path::PathBuf;

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .long("snapshot")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .help("Project snapshot (JSON)")
}

fn status_arg() -> Arg {
    Arg::new("status")
        .long("status")
        .action(ArgAction::Append)
        .value_parser(|s: &str| s.parse::<Status>())
        .help("Keep elements with this status (repeatable)")
}

fn cli() -> Command {
    Command::new("planctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Action plan snapshot viewer")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the plan as an indented tree")
                .arg(snapshot_arg())
                .arg(status_arg()),
        )
        .subcommand(
            Command::new("json")
                .about("Print the sorted plan elements as JSON")
                .arg(snapshot_arg())
                .arg(status_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Print per-phase progress")
                .arg(snapshot_arg()),
        )
}

async fn run(kind: OutputKind, args: &ArgMatches, config: &PlanctlConfig) -> anyhow::Result<()> {
    let path = args
        .get_one::<PathBuf>("snapshot")
        .context("missing --snapshot")?;
    let statuses: Vec<Status> = if kind == OutputKind::Summary {
        Vec::new()
    } else {
        args.get_many::<Status>("status")
            .map(|values| values.copied().collect())
            .unwrap_or_default()
    };

    let snapshot = ProjectSnapshot::load(path).await?;
    let project = snapshot.project_id.clone();
    tracing::debug!(
        "Loaded snapshot {} for project {project} ({} rows)",
        path.display(),
        snapshot.total_rows()
    );
    let loader = ActionPlanLoader::new(InMemoryPlanRepository::new().with_snapshot(snapshot))
        .with_config(config.hierarchy);

    let plan = loader
        .load(&project)
        .await
        .with_context(|| format!("cannot load plan of project {project}"))?;

    print!("{}", render(kind, &plan, &statuses)?);

    if !plan.warnings.is_empty() {
        tracing::info!("Project {project}: {} plan rows left out", plan.warnings.len());
    }
    if config.show_warnings {
        for warning in plan.warning_messages() {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let config = PlanctlConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    logging::init(&config.log_filter);

    match matches.subcommand() {
        Some(("tree", args)) => run(OutputKind::Tree, args, &config).await,
        Some(("json", args)) => run(OutputKind::Json, args, &config).await,
        Some(("summary", args)) => run(OutputKind::Summary, args, &config).await,
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
}
