//! Folder-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::FolderId;

/// Events related to folder operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FolderEvent {
    /// A folder was renamed.
    Renamed {
        /// The folder ID.
        folder_id: FolderId,
        /// The previous name.
        old_name: String,
        /// The new name.
        new_name: String,
    },
}
