//! Saved route CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use routehub_core::error::AppError;
use routehub_entity::route::{CreateRoute, Route};
use routehub_service::{FolderService, RouteService, SaveMode};

/// Arguments for route commands
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Route subcommand
    #[command(subcommand)]
    pub command: RouteCommand,
}

/// Route subcommands
#[derive(Debug, Subcommand)]
pub enum RouteCommand {
    /// List routes, of one folder or of every folder
    List {
        /// Only this folder
        #[arg(long)]
        folder: Option<String>,
    },
    /// Show one route as JSON
    Show {
        /// Folder holding the route
        folder: String,
        /// Route id
        id: String,
    },
    /// Save a new route. Missing name, method or URL are prompted for.
    Add {
        #[command(flatten)]
        fields: RouteFields,
        /// Target folder (defaults to root)
        #[arg(long, default_value = "root")]
        folder: String,
    },
    /// Overwrite a route. Fields not given keep their stored value.
    Edit {
        /// Folder holding the route
        folder: String,
        /// Route id
        id: String,
        #[command(flatten)]
        fields: RouteFields,
        /// Move the route to this folder
        #[arg(long = "to")]
        to_folder: Option<String>,
    },
    /// Delete a route
    Delete {
        /// Folder holding the route
        folder: String,
        /// Route id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Editable route fields. An empty value clears an optional field.
#[derive(Debug, Clone, Args)]
pub struct RouteFields {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// HTTP method
    #[arg(short, long)]
    pub method: Option<String>,
    /// Target URL or path
    #[arg(short, long)]
    pub url: Option<String>,
    /// Raw request body
    #[arg(short, long)]
    pub body: Option<String>,
    /// Bearer token
    #[arg(long)]
    pub bearer_token: Option<String>,
    /// Basic auth credentials
    #[arg(long)]
    pub basic_auth: Option<String>,
}

/// Route display row
#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    /// Route id
    id: String,
    /// Folder
    folder: String,
    /// Method
    method: String,
    /// Name
    name: String,
    /// URL
    url: String,
    /// Has a body
    body: String,
}

impl From<&Route> for RouteRow {
    fn from(r: &Route) -> Self {
        Self {
            id: r.id.clone(),
            folder: r.folder.clone(),
            method: r.method.clone(),
            name: r.name.clone(),
            url: r.url.clone(),
            body: if r.body.is_some() { "yes" } else { "-" }.to_string(),
        }
    }
}

/// Execute route commands
pub async fn execute(
    args: &RouteArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let routes = RouteService::new(store.clone());

    match &args.command {
        RouteCommand::List { folder } => {
            let listed: Vec<Route> = match folder {
                Some(folder) => routes.list_routes(folder).await?,
                None => FolderService::new(store)
                    .list_folders()
                    .await?
                    .into_iter()
                    .flat_map(|f| f.routes)
                    .collect(),
            };
            let rows: Vec<RouteRow> = listed.iter().map(RouteRow::from).collect();
            output::print_list(&rows, format);
        }
        RouteCommand::Show { folder, id } => {
            let route = routes.get_route(folder, id).await?;
            output::print_json(&route);
        }
        RouteCommand::Add { fields, folder } => {
            let draft = CreateRoute {
                name: Some(prompt_if_missing(&fields.name, "Route name")?),
                method: Some(prompt_if_missing(&fields.method, "HTTP method")?),
                url: Some(prompt_if_missing(&fields.url, "URL")?),
                body: fields.body.clone(),
                bearer_token: fields.bearer_token.clone(),
                basic_auth: fields.basic_auth.clone(),
                folder: None,
            };
            let mode = SaveMode::Create {
                folder: folder.clone(),
            };
            let route = routes.save(mode, draft).await?;
            output::print_success(&format!(
                "Route '{}' saved in '{}' (id: {})",
                route.name, route.folder, route.id
            ));
        }
        RouteCommand::Edit {
            folder,
            id,
            fields,
            to_folder,
        } => {
            let current = routes.get_route(folder, id).await?;
            let draft = merge_fields(&current, fields, to_folder.clone());
            let mode = SaveMode::Edit {
                folder: folder.clone(),
                id: id.clone(),
            };
            let route = routes.save(mode, draft).await?;
            output::print_success(&format!(
                "Route '{}' updated in '{}'",
                route.id, route.folder
            ));
        }
        RouteCommand::Delete { folder, id, yes } => {
            let prompt = format!("Delete route '{}' from '{}'?", id, folder);
            if !super::confirm(&prompt, *yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            routes.delete_route(folder, id).await?;
            output::print_success(&format!("Route '{}' deleted", id));
        }
    }

    Ok(())
}

/// Full draft for an edit: given fields override the stored route, empty
/// values clear optional fields.
fn merge_fields(current: &Route, fields: &RouteFields, to_folder: Option<String>) -> CreateRoute {
    let optional = |given: &Option<String>, stored: &Option<String>| match given {
        Some(v) if v.is_empty() => None,
        Some(v) => Some(v.clone()),
        None => stored.clone(),
    };

    CreateRoute {
        name: Some(fields.name.clone().unwrap_or_else(|| current.name.clone())),
        method: Some(fields.method.clone().unwrap_or_else(|| current.method.clone())),
        url: Some(fields.url.clone().unwrap_or_else(|| current.url.clone())),
        body: optional(&fields.body, &current.body),
        bearer_token: optional(&fields.bearer_token, &current.bearer_token),
        basic_auth: optional(&fields.basic_auth, &current.basic_auth),
        folder: to_folder,
    }
}

fn prompt_if_missing(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e))),
    }
}
