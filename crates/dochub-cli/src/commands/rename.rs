//! Rename CLI command.

use clap::Args;

use super::NodeArgs;
use crate::output;
use dochub_core::error::AppError;
use dochub_service::DocumentHub;

/// Arguments for the rename command
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Node to rename
    #[command(flatten)]
    pub node: NodeArgs,

    /// New name
    #[arg(short, long)]
    pub name: String,
}

/// Execute the rename command
pub fn execute(args: &RenameArgs, hub: &mut DocumentHub) -> Result<(), AppError> {
    let node = args.node.to_node_ref()?;
    hub.rename(&node, &args.name)?;
    output::print_success(&format!("Renamed {} to '{}'", node, args.name.trim()));
    Ok(())
}
