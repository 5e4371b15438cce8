//! CLI command definitions and dispatch.

pub mod export;
pub mod folder;
pub mod list;
pub mod rename;
pub mod share;
pub mod tree;
pub mod upload;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::output::OutputFormat;
use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_core::types::{FileId, FolderId};
use dochub_entity::{FolderItem, NodeRef};
use dochub_service::DocumentHub;

/// DocHub employee document hub CLI
#[derive(Debug, Parser)]
#[command(name = "dochub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// JSON file holding the folder forest (defaults to hub.seed_path, then the built-in sample)
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Write the resulting tree as JSON to this path after the command
    #[arg(short, long)]
    pub out: Option<PathBuf>,

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
    /// Show the folder tree
    Tree(tree::TreeArgs),
    /// List files, optionally scoped, searched and paginated
    List(list::ListArgs),
    /// Show a folder's location, counts and collaborators
    Folder(folder::FolderArgs),
    /// Upload local files into a folder (only name and size are recorded)
    Upload(upload::UploadArgs),
    /// Rename a file or folder
    Rename(rename::RenameArgs),
    /// Request a share for a file or folder
    Share(share::ShareArgs),
    /// Print the folder forest as JSON
    Export(export::ExportArgs),
}

/// Selects exactly one file or folder
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct NodeArgs {
    /// File ID
    #[arg(long)]
    pub file: Option<String>,

    /// Folder ID
    #[arg(long)]
    pub folder: Option<String>,
}

impl NodeArgs {
    /// Resolve the selection into a node reference
    pub fn to_node_ref(&self) -> Result<NodeRef, AppError> {
        match (&self.file, &self.folder) {
            (Some(file), _) => Ok(NodeRef::File(file.parse::<FileId>()?)),
            (None, Some(folder)) => Ok(NodeRef::Folder(folder.parse::<FolderId>()?)),
            (None, None) => Err(AppError::validation("Either --file or --folder is required")),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let seed = self
            .seed
            .clone()
            .or_else(|| config.hub.seed_path.as_ref().map(PathBuf::from));
        let mut hub = load_hub(seed.as_deref(), config).await?;

        match &self.command {
            Commands::Tree(args) => tree::execute(args, &hub, self.format)?,
            Commands::List(args) => list::execute(args, &hub, self.format)?,
            Commands::Folder(args) => folder::execute(args, &hub, self.format)?,
            Commands::Upload(args) => upload::execute(args, &mut hub, self.format).await?,
            Commands::Rename(args) => rename::execute(args, &mut hub)?,
            Commands::Share(args) => share::execute(args, &mut hub, self.format)?,
            Commands::Export(_) => export::execute(&hub),
        }

        if let Some(out) = &self.out {
            write_forest(&hub, out).await?;
        }

        Ok(())
    }
}

/// Helper: build the hub from a seed file or the built-in sample forest
pub async fn load_hub(seed: Option<&Path>, config: &AppConfig) -> Result<DocumentHub, AppError> {
    match seed {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                AppError::storage(format!("Failed to read seed '{}': {e}", path.display()))
            })?;
            let forest: Vec<FolderItem> = serde_json::from_str(&raw)?;
            info!(seed = %path.display(), roots = forest.len(), "Loaded seed forest");
            DocumentHub::from_forest(forest, &config.hub)
        }
        None => DocumentHub::seeded(&config.hub),
    }
}

/// Helper: write the hub's forest as pretty JSON
async fn write_forest(hub: &DocumentHub, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&hub.export())?;
    tokio::fs::write(path, json).await?;
    info!(path = %path.display(), revision = hub.revision(), "Tree written");
    Ok(())
}
