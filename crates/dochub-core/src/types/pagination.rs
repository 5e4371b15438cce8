//! Pagination types for the document grid.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 8;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Number of items on a full page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based), after clamping.
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

/// Slice an ordered sequence into the requested page.
///
/// The page number is clamped to `[1, max(1, total_pages)]` so that a
/// filter shrinking the result set never leaves the caller on an empty
/// page past the end.
pub fn paginate<T: Serialize>(items: Vec<T>, request: &PageRequest) -> PageResponse<T> {
    let total_items = items.len() as u64;
    let requested = PageRequest::new(request.page, request.page_size);
    let effective = PageRequest {
        page: requested
            .page
            .min(total_pages(total_items, requested.page_size)),
        ..requested
    };

    let slice: Vec<T> = items
        .into_iter()
        .skip(effective.offset() as usize)
        .take(effective.limit() as usize)
        .collect();

    PageResponse::new(slice, effective.page, effective.page_size, total_items)
}

fn total_pages(total_items: u64, page_size: u64) -> u64 {
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size.max(1))
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
