//! File-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{FileId, FolderId};

/// Events related to file operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FileEvent {
    /// A batch of files was appended to a folder.
    Uploaded {
        /// The folder receiving the files.
        folder_id: FolderId,
        /// The new file IDs, in append order.
        file_ids: Vec<FileId>,
        /// Sum of the uploaded sizes in bytes.
        total_bytes: u64,
    },
    /// A file was renamed.
    Renamed {
        /// The file ID.
        file_id: FileId,
        /// The previous name.
        old_name: String,
        /// The new name.
        new_name: String,
    },
}
