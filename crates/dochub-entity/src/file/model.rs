//! File entity model.

use serde::{Deserialize, Serialize};

use dochub_core::types::FileId;

/// Visibility label shown on a file card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileAccess {
    /// Visible to the owner only.
    #[default]
    Private,
    /// Visible to the people the folder was shared with.
    Shared,
}

impl FileAccess {
    /// Return the access label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Shared => "Shared",
        }
    }
}

impl std::fmt::Display for FileAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file held in the document hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// Human-readable size, display only.
    pub size: String,
    /// Visibility label.
    #[serde(default)]
    pub access: FileAccess,
    /// Denormalized display path of the containing folder.
    ///
    /// Not authoritative: flattening recomputes it from the tree.
    #[serde(default)]
    pub folder_path: String,
}

impl FileItem {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }

    /// Case-insensitive substring match on the file name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// A file chosen in the picker, as handed to an upload.
///
/// Only the name and byte size are consumed; content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadBlob {
    /// Original file name.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl UploadBlob {
    /// Create a new upload blob.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> FileItem {
        FileItem {
            id: FileId::from("f1"),
            name: name.to_string(),
            size: "1 B".to_string(),
            access: FileAccess::Private,
            folder_path: String::new(),
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(item("Payslip_Jan.PDF").extension().as_deref(), Some("pdf"));
        assert_eq!(item("README").extension(), None);
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let file = item("Payslip_Jan.pdf");
        assert!(file.name_contains("payslip"));
        assert!(file.name_contains(""));
        assert!(!file.name_contains("aadhar"));
    }

    #[test]
    fn test_json_uses_camel_case_folder_path() {
        let json = serde_json::to_value(item("a.pdf")).expect("serialize");
        assert!(json.get("folderPath").is_some());
        assert_eq!(json["access"], "Private");
    }
}
