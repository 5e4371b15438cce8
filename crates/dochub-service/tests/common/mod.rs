//! Shared fixtures for document hub integration tests.

use dochub_core::config::HubConfig;
use dochub_core::types::FileId;
use dochub_entity::{FileAccess, FileItem, FolderItem};
use dochub_service::DocumentHub;

/// Build a file record with an empty stored path.
pub fn file(id: &str, name: &str) -> FileItem {
    FileItem {
        id: FileId::from(id),
        name: name.to_string(),
        size: "100.00 KB".to_string(),
        access: FileAccess::Private,
        folder_path: String::new(),
    }
}

/// `Personal [Aadhar.pdf]`, `HR / Payslips [Payslip_Jan.pdf]`.
pub fn scenario_forest() -> Vec<FolderItem> {
    vec![
        FolderItem::new("1", "Personal").with_file(file("f1", "Aadhar.pdf")),
        FolderItem::new("2", "HR").with_folder(
            FolderItem::new("2-1", "Payslips").with_file(file("f2", "Payslip_Jan.pdf")),
        ),
    ]
}

/// A wider forest with several levels and empty folders.
pub fn deep_forest() -> Vec<FolderItem> {
    let mut roots = Vec::new();
    for r in 0..3 {
        let mut root = FolderItem::new(format!("r{r}"), format!("Root {r}"));
        for f in 0..r {
            root = root.with_file(file(&format!("r{r}-f{f}"), &format!("root{r}_{f}.pdf")));
        }
        for c in 0..2 {
            let mut child = FolderItem::new(format!("r{r}-c{c}"), format!("Child {c}"));
            for f in 0..(r + c + 1) {
                child = child.with_file(file(
                    &format!("r{r}-c{c}-f{f}"),
                    &format!("Doc_{r}_{c}_{f}.docx"),
                ));
            }
            child = child.with_folder(FolderItem::new(format!("r{r}-c{c}-empty"), "Empty"));
            root = root.with_folder(child);
        }
        roots.push(root);
    }
    roots
}

/// A hub with default configuration over `forest`.
pub fn hub(forest: Vec<FolderItem>) -> DocumentHub {
    DocumentHub::from_forest(forest, &HubConfig::default()).expect("fixture ids are unique")
}
