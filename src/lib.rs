// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod project;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::{ConfigFile, ProjectDefinition};
use crate::errors::{ProjrunError, Result};
use crate::exec::{CommandExecutor, DryRunExecutor, ShellExecutor};
use crate::fs::{FileSystem, RealFileSystem};
use crate::project::{AmbientDefaults, Operation, ProjectRunner};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + ambient defaults
/// - project selection (`--project`)
/// - executor choice (`--dry-run`)
/// - sequential execution of the requested operations
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let cfg = load_and_validate(&config_path)?;

    let ambient =
        AmbientDefaults::from_settings(&cfg.settings, &config_path)?.with_commands(&cfg.commands);
    debug!(?ambient, "resolved ambient defaults");

    let projects = select_projects(&cfg, &args.projects)?;

    if let Command::List = args.command {
        print_projects(&projects, &ambient);
        return Ok(());
    }

    let executor: Arc<dyn CommandExecutor> = if args.dry_run {
        Arc::new(DryRunExecutor)
    } else {
        Arc::new(ShellExecutor::new())
    };

    run_operations(
        &projects,
        &ambient,
        &args.command.operations(),
        executor,
        Arc::new(RealFileSystem),
    )
    .await
}

/// Run `operations` for each project in order.
///
/// Projects are processed one after another; for each project the operations
/// run in sequence. The first error aborts everything that follows.
pub async fn run_operations(
    projects: &[ProjectDefinition],
    ambient: &AmbientDefaults,
    operations: &[Operation],
    executor: Arc<dyn CommandExecutor>,
    fs: Arc<dyn FileSystem>,
) -> Result<()> {
    for definition in projects {
        let runner = ProjectRunner::new(definition, ambient)
            .with_executor(Arc::clone(&executor))
            .with_fs(Arc::clone(&fs));

        for operation in operations {
            runner.perform(operation).await?;
        }
    }

    info!(
        projects = projects.len(),
        operations = operations.len(),
        "all operations completed"
    );
    Ok(())
}

/// Pick the projects named on the CLI, keeping config order.
///
/// An empty selection means every project.
pub fn select_projects(cfg: &ConfigFile, names: &[String]) -> Result<Vec<ProjectDefinition>> {
    if names.is_empty() {
        return Ok(cfg.projects.clone());
    }

    if let Some(unknown) = names.iter().find(|n| cfg.project(n).is_none()) {
        let available: Vec<&str> = cfg.projects.iter().map(|p| p.name.as_str()).collect();
        return Err(ProjrunError::config(format!(
            "unknown project '{}' (available: {})",
            unknown,
            available.join(", ")
        )));
    }

    Ok(cfg
        .projects
        .iter()
        .filter(|p| names.contains(&p.name))
        .cloned()
        .collect())
}

/// `list` output: projects with their resolved directories and templates.
fn print_projects(projects: &[ProjectDefinition], ambient: &AmbientDefaults) {
    println!("projects ({}):", projects.len());
    for definition in projects {
        let runner = ProjectRunner::new(definition, ambient);
        println!("  - {}", runner.name());
        println!("      origin_url: {}", runner.origin_url());
        println!("      dir: {}", runner.project_dir().display());
        println!("      user: {}", runner.user());
        if !runner.branches().is_empty() {
            println!("      branches: {:?}", runner.branches());
        }
        println!("      clone: {}", runner.render_clone());
        println!("      install: {}", runner.render_install());
        println!("      update: {}", runner.commands().update);
    }
}
