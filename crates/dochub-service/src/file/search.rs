//! Searchable, paginated grid view over the flattened tree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dochub_core::config::HubConfig;
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse, paginate};
use dochub_core::types::FolderId;
use dochub_entity::{FileItem, FolderTree};

use crate::folder::TreeService;

/// Parameters of a grid view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Restrict the view to one folder's subtree.
    #[serde(default)]
    pub scope: Option<FolderId>,
    /// Case-insensitive substring on the file name.
    #[serde(default)]
    pub search: Option<String>,
    /// Page number (1-based). Out-of-range pages are clamped.
    #[serde(default)]
    pub page: Option<u64>,
    /// Page size override.
    #[serde(default)]
    pub page_size: Option<u64>,
}

/// Filters and paginates flattened files.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Flattening service.
    tree_service: TreeService,
    /// Page size used when a query does not set one.
    default_page_size: u64,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(config: &HubConfig) -> Self {
        Self {
            tree_service: TreeService::new(),
            default_page_size: config.page_size,
        }
    }

    /// Keeps files whose name contains `query`, ignoring case.
    ///
    /// An empty or absent query keeps everything. Order is preserved.
    pub fn filter(&self, items: Vec<FileItem>, query: Option<&str>) -> Vec<FileItem> {
        let needle = query.unwrap_or_default().to_lowercase();
        if needle.is_empty() {
            return items;
        }
        items
            .into_iter()
            .filter(|file| file.name_contains(&needle))
            .collect()
    }

    /// Scoped flatten, then filter, without pagination.
    pub fn matching(&self, tree: &FolderTree, query: &ViewQuery) -> AppResult<Vec<FileItem>> {
        let flat = self.tree_service.flatten_scope(tree, query.scope.as_ref())?;
        Ok(self.filter(flat, query.search.as_deref()))
    }

    /// Scoped flatten, filter, then paginate.
    pub fn query(&self, tree: &FolderTree, query: &ViewQuery) -> AppResult<PageResponse<FileItem>> {
        let matches = self.matching(tree, query)?;
        let request = PageRequest::new(
            query.page.unwrap_or(1),
            query.page_size.unwrap_or(self.default_page_size),
        );
        let page = paginate(matches, &request);

        debug!(
            scope = ?query.scope,
            search = ?query.search,
            page = page.page,
            total_items = page.total_items,
            "Document view computed"
        );

        Ok(page)
    }
}
