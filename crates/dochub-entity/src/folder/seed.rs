//! Built-in sample forest used when no seed file is configured.

use dochub_core::types::FileId;

use super::model::FolderItem;
use crate::file::{FileAccess, FileItem};
use crate::permission::{FolderPermission, PermissionRole};

fn file(id: &str, name: &str, size: &str, access: FileAccess, folder_path: &str) -> FileItem {
    FileItem {
        id: FileId::from(id),
        name: name.to_string(),
        size: size.to_string(),
        access,
        folder_path: folder_path.to_string(),
    }
}

/// The employee document forest shipped with the hub.
pub fn default_forest() -> Vec<FolderItem> {
    vec![
        FolderItem::new("1", "Personal")
            .with_file(file("f1", "Aadhar.pdf", "1.20 MB", FileAccess::Private, "Personal"))
            .with_file(file("f3", "PAN_Card.pdf", "845.00 KB", FileAccess::Private, "Personal")),
        FolderItem::new("2", "HR")
            .with_permission(FolderPermission {
                email: "hr@company.com".to_string(),
                role: PermissionRole::Manage,
            })
            .with_folder(
                FolderItem::new("2-1", "Payslips")
                    .with_file(file("f2", "Payslip_Jan.pdf", "220.00 KB", FileAccess::Shared, "HR / Payslips"))
                    .with_file(file("f4", "Payslip_Feb.pdf", "218.00 KB", FileAccess::Shared, "HR / Payslips")),
            )
            .with_folder(
                FolderItem::new("2-2", "Offer Letters")
                    .with_file(file("f5", "Offer_Letter.pdf", "310.00 KB", FileAccess::Private, "HR / Offer Letters")),
            ),
        FolderItem::new("3", "Policies")
            .with_file(file("f6", "Leave_Policy.pdf", "96.00 KB", FileAccess::Shared, "Policies"))
            .with_file(file("f7", "Code_of_Conduct.pdf", "1.05 MB", FileAccess::Shared, "Policies")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::FolderTree;

    #[test]
    fn test_default_forest_builds() {
        let forest = default_forest();
        let expected: usize = forest.iter().map(FolderItem::file_count).sum();
        let tree = FolderTree::from_forest(forest).expect("seed ids are unique");
        assert_eq!(tree.total_files(), expected);
        assert_eq!(tree.total_folders(), 5);
    }
}
