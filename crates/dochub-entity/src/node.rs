//! Reference to a node in the folder tree.

use serde::{Deserialize, Serialize};

use dochub_core::types::{FileId, FolderId};

/// A file or folder addressed by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum NodeRef {
    /// A file node.
    File(FileId),
    /// A folder node.
    Folder(FolderId),
}

impl NodeRef {
    /// Return the node kind as a lowercase string.
    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Folder(_) => "folder",
        }
    }

    /// Return the raw id string.
    pub fn id_str(&self) -> &str {
        match self {
            Self::File(id) => id.as_str(),
            Self::Folder(id) => id.as_str(),
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.resource_type(), self.id_str())
    }
}

impl From<FileId> for NodeRef {
    fn from(id: FileId) -> Self {
        Self::File(id)
    }
}

impl From<FolderId> for NodeRef {
    fn from(id: FolderId) -> Self {
        Self::Folder(id)
    }
}
