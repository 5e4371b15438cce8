//! Export CLI command.

use clap::Args;

use crate::output;
use dochub_service::DocumentHub;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {}

/// Execute the export command
pub fn execute(hub: &DocumentHub) {
    output::print_json(&hub.export());
}
