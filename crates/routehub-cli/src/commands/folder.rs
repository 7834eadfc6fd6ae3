//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use routehub_core::error::AppError;
use routehub_service::{CreateFolderRequest, FolderService, RenameFolderRequest};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List folders that hold routes
    List,
    /// List every folder name, `root` first
    Names,
    /// Show a folder with its routes as JSON, empty folders included
    Show {
        /// Folder name
        name: String,
    },
    /// Create an empty folder
    Create {
        /// Folder name
        name: String,
    },
    /// Rename a folder
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Delete a folder and every route in it
    Delete {
        /// Folder name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Display name
    display_name: String,
    /// Route count
    routes: usize,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let folders = FolderService::new(super::open_store(&config).await?);

    match &args.command {
        FolderCommand::List => {
            let rows: Vec<FolderRow> = folders
                .list_folders()
                .await?
                .into_iter()
                .map(|f| FolderRow {
                    routes: f.routes.len(),
                    name: f.name,
                    display_name: f.display_name,
                })
                .collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Names => {
            let names = folders.list_names().await?;
            match format {
                OutputFormat::Table => names.iter().for_each(|n| println!("{n}")),
                OutputFormat::Json => output::print_json(&names),
            }
        }
        FolderCommand::Show { name } => {
            let folder = folders.get_folder(name).await?;
            output::print_json(&folder);
        }
        FolderCommand::Create { name } => {
            let name = folders
                .create_folder(CreateFolderRequest { name: name.clone() })
                .await?;
            output::print_success(&format!("Folder '{}' created", name));
        }
        FolderCommand::Rename { old, new } => {
            let renamed = folders
                .rename_folder(old, RenameFolderRequest { name: new.clone() })
                .await?;
            output::print_success(&format!("Folder '{}' renamed to '{}'", old, renamed));
        }
        FolderCommand::Delete { name, yes } => {
            let prompt = format!("Delete folder '{}' and all its routes?", name);
            if !super::confirm(&prompt, *yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            folders.delete_folder(name).await?;
            output::print_success(&format!("Folder '{}' deleted", name));
        }
    }

    Ok(())
}
