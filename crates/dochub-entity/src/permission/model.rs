//! Folder permission model.
//!
//! Permissions are display-only: they are seeded and shown next to a
//! folder but never checked by any operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dochub_core::AppError;

/// Role granted to a collaborator on a folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionRole {
    /// May browse and open files.
    #[default]
    View,
    /// May also upload into the folder.
    Upload,
    /// May also rename and share.
    Manage,
}

impl PermissionRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Upload => "upload",
            Self::Manage => "manage",
        }
    }
}

impl fmt::Display for PermissionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PermissionRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "upload" => Ok(Self::Upload),
            "manage" => Ok(Self::Manage),
            _ => Err(AppError::validation(format!(
                "Invalid permission role: '{s}'. Expected one of: view, upload, manage"
            ))),
        }
    }
}

/// A collaborator entry attached to a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPermission {
    /// Collaborator email.
    pub email: String,
    /// Granted role.
    pub role: PermissionRole,
}
