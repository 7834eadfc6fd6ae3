//! Workspace export and import CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use routehub_core::error::AppError;
use routehub_entity::workspace::WorkspaceSnapshot;
use routehub_service::WorkspaceService;

/// Arguments for workspace commands
#[derive(Debug, Args)]
pub struct WorkspaceArgs {
    /// Workspace subcommand
    #[command(subcommand)]
    pub command: WorkspaceCommand,
}

/// Workspace subcommands
#[derive(Debug, Subcommand)]
pub enum WorkspaceCommand {
    /// Export every folder and route as a snapshot
    Export {
        /// Write the snapshot to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Replace the whole store with a snapshot file
    Import {
        /// Snapshot file
        file: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute workspace commands
pub async fn execute(
    args: &WorkspaceArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let workspace = WorkspaceService::new(super::open_store(&config).await?);

    match &args.command {
        WorkspaceCommand::Export { output: out_path } => {
            let snapshot = workspace.export().await?;
            match out_path {
                Some(path) => {
                    let json = serde_json::to_string_pretty(&snapshot)?;
                    tokio::fs::write(path, json).await.map_err(|e| {
                        AppError::internal(format!("Failed to write '{}': {}", path, e))
                    })?;
                    output::print_success(&format!(
                        "Exported {} folders and {} routes to '{}'",
                        snapshot.folders.len(),
                        snapshot.route_count(),
                        path
                    ));
                }
                None => output::print_json(&snapshot),
            }
        }
        WorkspaceCommand::Import { file, yes } => {
            let raw = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| AppError::internal(format!("Failed to read '{}': {}", file, e)))?;
            let snapshot: WorkspaceSnapshot = serde_json::from_str(&raw)
                .map_err(|e| AppError::validation(format!("Invalid snapshot '{}': {}", file, e)))?;
            snapshot.validate()?;

            let prompt = format!(
                "Replace every folder and route with the {} routes of '{}'?",
                snapshot.route_count(),
                file
            );
            if !super::confirm(&prompt, *yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            let report = workspace.import(snapshot).await?;
            if format == OutputFormat::Json {
                output::print_json(&report);
                return Ok(());
            }

            let summary = format!(
                "Imported {} folders and {} routes",
                report.folders_created, report.routes_created
            );
            if report.is_complete() {
                output::print_success(&summary);
            } else {
                output::print_warning(&format!(
                    "{} with {} failures",
                    summary,
                    report.failures.len()
                ));
            }
            for failure in &report.failures {
                let target = match &failure.route {
                    Some(route) => format!("{}/{}", failure.folder, route),
                    None => failure.folder.clone(),
                };
                output::print_warning(&format!("{}: {}", target, failure.message));
            }
        }
    }

    Ok(())
}
