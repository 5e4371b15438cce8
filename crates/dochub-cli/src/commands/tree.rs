//! Folder tree display.

use clap::Args;

use crate::output::{self, OutputFormat};
use dochub_core::error::AppError;
use dochub_entity::{FolderNode, FolderTree};
use dochub_service::DocumentHub;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Max depth to print (0 shows roots only)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Also print file names under each folder
    #[arg(long)]
    pub files: bool,
}

/// Execute the tree command
pub fn execute(args: &TreeArgs, hub: &DocumentHub, format: OutputFormat) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        output::print_json(&hub.export());
        return Ok(());
    }

    let tree = hub.tree();
    println!("/");
    for root in tree.root_nodes() {
        print_node(tree, root, 0, args)?;
    }
    Ok(())
}

fn print_node(
    tree: &FolderTree,
    node: &FolderNode,
    depth: usize,
    args: &TreeArgs,
) -> Result<(), AppError> {
    if args.depth.is_some_and(|max| depth > max) {
        return Ok(());
    }

    let summary = tree.summary(&node.id)?;
    let indent = "  ".repeat(depth + 1);
    println!(
        "{}├── {}/ [{}] ({} files)",
        indent, node.name, node.id, summary.total_files
    );

    if args.files {
        for file in tree.folder_files(node) {
            println!("{}  · {} ({})", indent, file.name, file.size);
        }
    }

    for child in tree.child_folders(node) {
        print_node(tree, child, depth + 1, args)?;
    }
    Ok(())
}
