//! OpenAPI document CLI commands.

use clap::{Args, Subcommand};

use crate::output;
use routehub_core::error::AppError;
use routehub_docs::RenderFormat;
use routehub_service::DocService;

/// Arguments for docs commands
#[derive(Debug, Args)]
pub struct DocsArgs {
    /// Docs subcommand
    #[command(subcommand)]
    pub command: DocsCommand,

    /// Document format: json or yaml
    #[arg(long, global = true, default_value = "json")]
    pub format: String,

    /// Write the document to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

/// Docs subcommands
#[derive(Debug, Subcommand)]
pub enum DocsCommand {
    /// Document a single route
    Route {
        /// Folder holding the route
        folder: String,
        /// Route id
        id: String,
    },
    /// Document every route of a folder
    Folder {
        /// Folder name
        name: String,
    },
}

/// Execute docs commands
pub async fn execute(args: &DocsArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let format: RenderFormat = args.format.parse()?;
    let docs = DocService::new(super::open_store(&config).await?, config.docs.clone());

    let text = match &args.command {
        DocsCommand::Route { folder, id } => docs.render_route(folder, id, format).await?,
        DocsCommand::Folder { name } => docs.render_folder(name, format).await?,
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, text)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write '{}': {}", path, e)))?;
            output::print_success(&format!("Document written to '{}'", path));
        }
        None => println!("{}", text.trim_end()),
    }

    Ok(())
}
