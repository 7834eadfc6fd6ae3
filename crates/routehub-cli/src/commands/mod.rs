//! CLI command definitions and dispatch.

pub mod config;
pub mod docs;
pub mod folder;
pub mod route;
pub mod serve;
pub mod workspace;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use routehub_core::config::AppConfig;
use routehub_core::error::AppError;
use routehub_service::RouteStore;
use routehub_storage::LocalStorageProvider;

/// RouteHub: saved HTTP routes and their OpenAPI documentation
#[derive(Debug, Parser)]
#[command(name = "routehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the RouteHub server
    Serve(serve::ServeArgs),
    /// Folder management
    Folder(folder::FolderArgs),
    /// Saved route management
    Route(route::RouteArgs),
    /// OpenAPI document generation
    Docs(docs::DocsArgs),
    /// Workspace export and import
    Workspace(workspace::WorkspaceArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Route(args) => route::execute(args, &self.config, self.format).await,
            Commands::Docs(args) => docs::execute(args, &self.config).await,
            Commands::Workspace(args) => workspace::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}

/// Helper: open the route store named by the configuration
pub async fn open_store(config: &AppConfig) -> Result<Arc<RouteStore>, AppError> {
    tracing::debug!(routes_dir = %config.storage.routes_dir, "Opening route store");
    let storage = LocalStorageProvider::new(&config.storage.routes_dir).await?;
    Ok(Arc::new(RouteStore::new(Arc::new(storage))))
}

/// Helper: ask for confirmation unless `assume_yes` is set
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}
