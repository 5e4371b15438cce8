//! Share-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::ShareId;

/// Events related to sharing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A share was requested for a node. No permission is recorded.
    Requested {
        /// The share intent ID.
        share_id: ShareId,
        /// `"file"` or `"folder"`.
        resource_type: String,
        /// The shared node ID.
        resource_id: String,
        /// Recipient email.
        email: String,
        /// Requested role.
        role: String,
    },
}
