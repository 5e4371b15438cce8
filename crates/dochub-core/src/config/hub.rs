//! Document hub configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the document hub tree and its grid view.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Number of files shown per grid page.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,

    /// Largest file accepted by an upload, in bytes (default 25 MB).
    #[serde(default = "default_max_upload")]
    #[validate(range(min = 1))]
    pub max_upload_size_bytes: u64,

    /// Role attached to share intents: `"view"`, `"upload"` or `"manage"`.
    #[serde(default = "default_share_role")]
    #[validate(length(min = 1))]
    pub default_share_role: String,

    /// Optional JSON file holding the seed folder forest.
    #[serde(default)]
    pub seed_path: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_upload_size_bytes: default_max_upload(),
            default_share_role: default_share_role(),
            seed_path: None,
        }
    }
}

fn default_page_size() -> u64 {
    8
}

fn default_max_upload() -> u64 {
    26_214_400 // 25 MB
}

fn default_share_role() -> String {
    "view".to_string()
}
