//! Folder tree flattening and path resolution.
//!
//! Flattening walks the forest depth-first, pre-order: a folder's own
//! files are emitted before its subfolders, and subfolders are visited in
//! display order. Every emitted file is a copy whose `folder_path` is
//! recomputed from the walk, so stale stored paths never leak into a view.

use serde::{Deserialize, Serialize};

use dochub_core::result::AppResult;
use dochub_core::types::FolderId;
use dochub_entity::folder::{FolderItem, FolderNode, FolderTree, PATH_SEPARATOR};
use dochub_entity::FileItem;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
}

/// Flattens folder trees and resolves paths.
#[derive(Debug, Clone, Default)]
pub struct TreeService;

impl TreeService {
    /// Creates a new tree service.
    pub fn new() -> Self {
        Self
    }

    /// Flattens every root folder into a single ordered file list.
    pub fn flatten(&self, tree: &FolderTree) -> Vec<FileItem> {
        let mut out = Vec::with_capacity(tree.total_files());
        let mut path = Vec::new();
        for root in tree.root_nodes() {
            walk(tree, root, &mut path, &mut out);
        }
        out
    }

    /// Flattens either the whole forest or a single folder's subtree.
    ///
    /// A scoped flatten treats the selected folder as its own root, so
    /// paths start at that folder's name rather than at the forest root.
    pub fn flatten_scope(
        &self,
        tree: &FolderTree,
        scope: Option<&FolderId>,
    ) -> AppResult<Vec<FileItem>> {
        match scope {
            None => Ok(self.flatten(tree)),
            Some(id) => {
                let node = tree.require_folder(id)?;
                let mut out = Vec::new();
                walk(tree, node, &mut Vec::new(), &mut out);
                Ok(out)
            }
        }
    }

    /// Gets the breadcrumb trail from the root to the given folder.
    pub fn breadcrumbs(&self, tree: &FolderTree, id: &FolderId) -> AppResult<Vec<Breadcrumb>> {
        Ok(tree
            .ancestors(id)?
            .into_iter()
            .map(|node| Breadcrumb {
                id: node.id.clone(),
                name: node.name.clone(),
            })
            .collect())
    }
}

fn walk<'a>(
    tree: &'a FolderTree,
    node: &'a FolderNode,
    path: &mut Vec<&'a str>,
    out: &mut Vec<FileItem>,
) {
    path.push(node.name.as_str());
    let folder_path = path.join(PATH_SEPARATOR);

    out.extend(tree.folder_files(node).map(|file| FileItem {
        folder_path: folder_path.clone(),
        ..file.clone()
    }));

    for child in tree.child_folders(node) {
        walk(tree, child, path, out);
    }

    path.pop();
}

/// Flattens a nested forest directly, with the same ordering and path
/// rules as [`TreeService::flatten`].
pub fn flatten_forest(forest: &[FolderItem]) -> Vec<FileItem> {
    fn visit<'a>(folder: &'a FolderItem, path: &mut Vec<&'a str>, out: &mut Vec<FileItem>) {
        path.push(folder.name.as_str());
        let folder_path = path.join(PATH_SEPARATOR);

        out.extend(folder.files.iter().map(|file| FileItem {
            folder_path: folder_path.clone(),
            ..file.clone()
        }));

        for child in &folder.folders {
            visit(child, path, out);
        }

        path.pop();
    }

    let mut out = Vec::new();
    let mut path = Vec::new();
    for root in forest {
        visit(root, &mut path, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dochub_core::types::FileId;
    use dochub_entity::FileAccess;

    fn file(id: &str, name: &str, stale_path: &str) -> FileItem {
        FileItem {
            id: FileId::from(id),
            name: name.to_string(),
            size: "1 B".to_string(),
            access: FileAccess::Private,
            folder_path: stale_path.to_string(),
        }
    }

    /// A -> [a1, B -> [b1], C -> [c1, D -> [d1]]], E -> []
    fn forest() -> Vec<FolderItem> {
        vec![
            FolderItem::new("a", "A")
                .with_file(file("a1", "a1.txt", "stale"))
                .with_folder(FolderItem::new("b", "B").with_file(file("b1", "b1.txt", "")))
                .with_folder(
                    FolderItem::new("c", "C")
                        .with_file(file("c1", "c1.txt", ""))
                        .with_folder(FolderItem::new("d", "D").with_file(file("d1", "d1.txt", ""))),
                ),
            FolderItem::new("e", "E"),
        ]
    }

    fn names(items: &[FileItem]) -> Vec<(&str, &str)> {
        items
            .iter()
            .map(|f| (f.name.as_str(), f.folder_path.as_str()))
            .collect()
    }

    #[test]
    fn test_flatten_pre_order_with_paths() {
        let tree = FolderTree::from_forest(forest()).expect("build");
        let flat = TreeService::new().flatten(&tree);
        assert_eq!(
            names(&flat),
            vec![
                ("a1.txt", "A"),
                ("b1.txt", "A / B"),
                ("c1.txt", "A / C"),
                ("d1.txt", "A / C / D"),
            ]
        );
    }

    #[test]
    fn test_flatten_does_not_touch_stored_paths() {
        let tree = FolderTree::from_forest(forest()).expect("build");
        let _ = TreeService::new().flatten(&tree);
        let stored = tree.require_file(&FileId::from("a1")).expect("file");
        assert_eq!(stored.item.folder_path, "stale");
    }

    #[test]
    fn test_flatten_empty_forest() {
        let tree = FolderTree::empty();
        assert!(TreeService::new().flatten(&tree).is_empty());
        assert!(flatten_forest(&[]).is_empty());
    }

    #[test]
    fn test_scoped_flatten_starts_at_selected_folder() {
        let tree = FolderTree::from_forest(forest()).expect("build");
        let scoped = TreeService::new()
            .flatten_scope(&tree, Some(&FolderId::from("c")))
            .expect("scope");
        assert_eq!(names(&scoped), vec![("c1.txt", "C"), ("d1.txt", "C / D")]);

        let err = TreeService::new()
            .flatten_scope(&tree, Some(&FolderId::from("zz")))
            .expect_err("missing");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_nested_and_arena_flatten_agree() {
        let nested = forest();
        let tree = FolderTree::from_forest(nested.clone()).expect("build");
        assert_eq!(flatten_forest(&nested), TreeService::new().flatten(&tree));
    }

    #[test]
    fn test_breadcrumbs() {
        let tree = FolderTree::from_forest(forest()).expect("build");
        let crumbs = TreeService::new()
            .breadcrumbs(&tree, &FolderId::from("d"))
            .expect("crumbs");
        let trail: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(trail, vec!["A", "C", "D"]);
    }
}
