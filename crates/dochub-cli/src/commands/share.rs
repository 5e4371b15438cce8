//! Share CLI command.

use clap::Args;

use super::NodeArgs;
use crate::output::{self, OutputFormat};
use dochub_core::error::AppError;
use dochub_service::DocumentHub;

/// Arguments for the share command
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Node to share
    #[command(flatten)]
    pub node: NodeArgs,

    /// Recipient email
    #[arg(short, long)]
    pub email: String,
}

/// Execute the share command
pub fn execute(args: &ShareArgs, hub: &mut DocumentHub, format: OutputFormat) -> Result<(), AppError> {
    let node = args.node.to_node_ref()?;
    let intent = hub.share(&node, &args.email)?;

    match format {
        OutputFormat::Json => output::print_json(&intent),
        OutputFormat::Table => {
            output::print_success(&format!("Share requested for {}", intent.target));
            output::print_kv("Share ID", intent.id.as_str());
            output::print_kv("Email", &intent.email);
            output::print_kv("Role", intent.role.as_str());
            output::print_kv("Requested at", &intent.requested_at.to_rfc3339());
        }
    }
    Ok(())
}
