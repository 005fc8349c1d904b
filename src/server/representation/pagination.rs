//! Paged result windows and the metadata derived from them.

use serde::Serialize;
use utoipa::ToSchema;

/// One page of results together with the paging facts derived from the
/// authoritative total count.
///
/// `total_count` must come from a count of the unpaged result set; it is never
/// re-derived from the window itself, which holds at most `page_size` items.
/// The page number is taken as supplied: a page before the first or past the
/// last simply yields an empty window, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total_count: u64,
    current_page: u64,
    page_size: u64,
    total_pages: u64,
}

impl<T> PagedList<T> {
    /// `page_size` must be at least 1; resource parameters clamp it before it
    /// reaches this point.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size);

        Self {
            items,
            total_count,
            current_page: page_number,
            page_size,
            total_pages,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Converts the window's items while keeping the paging facts intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }

    /// Paging metadata for the `X-Pagination` response header. Page links
    /// start out empty; the controller fills them in for the plain (non
    /// hypermedia) representation only.
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            previous_page_link: None,
            next_page_link: None,
        }
    }
}

/// Serialized into the `X-Pagination` header on collection responses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_link: Option<String>,
}
