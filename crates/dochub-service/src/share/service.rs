//! Share intent creation.
//!
//! Sharing records *that* a share was requested and returns a token for
//! it. It never appends a [`FolderPermission`] to the tree: permissions
//! stay whatever the folder was seeded with.
//!
//! [`FolderPermission`]: dochub_entity::FolderPermission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::ValidateEmail;

use dochub_core::AppError;
use dochub_core::config::HubConfig;
use dochub_core::result::AppResult;
use dochub_core::types::ShareId;
use dochub_entity::{FolderTree, NodeRef, PermissionRole};

/// A requested share, returned to the caller as its receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareIntent {
    /// Share intent ID.
    pub id: ShareId,
    /// The node being shared.
    pub target: NodeRef,
    /// Recipient email, trimmed.
    pub email: String,
    /// Role the recipient would receive.
    pub role: PermissionRole,
    /// When the share was requested.
    pub requested_at: DateTime<Utc>,
}

/// Validates share requests.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Role attached to every intent.
    default_role: PermissionRole,
}

impl ShareService {
    /// Creates a new share service, parsing the configured default role.
    pub fn new(config: &HubConfig) -> AppResult<Self> {
        let default_role: PermissionRole = config.default_share_role.parse().map_err(|e: AppError| {
            AppError::configuration(format!("hub.default_share_role: {}", e.message))
        })?;
        Ok(Self { default_role })
    }

    /// Validates the email and target, and returns a share intent.
    pub fn share(&self, tree: &FolderTree, target: &NodeRef, email: &str) -> AppResult<ShareIntent> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }
        if !email.validate_email() {
            return Err(AppError::validation(format!("'{email}' is not a valid email")));
        }

        match target {
            NodeRef::Folder(id) => {
                tree.require_folder(id)?;
            }
            NodeRef::File(id) => {
                tree.require_file(id)?;
            }
        }

        let intent = ShareIntent {
            id: ShareId::generate(),
            target: target.clone(),
            email,
            role: self.default_role,
            requested_at: Utc::now(),
        };

        info!(
            share_id = %intent.id,
            target = %intent.target,
            email = %intent.email,
            role = %intent.role,
            "Share requested"
        );

        Ok(intent)
    }
}
