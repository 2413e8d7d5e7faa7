//! Pagination types for list endpoints
//!
//! Two paging modes are supported and never mixed in one response:
//! offset paging (page number, total counts known) and cursor paging
//! (opaque continuation token, totals unknown).

use serde::{Deserialize, Serialize};

/// Offset paging parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping values into the accepted range
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based page index, as used by storage adapters
    pub fn zero_based_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.zero_based_index()) * u64::from(self.size)
    }

    pub fn limit(&self) -> u32 {
        self.size
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Validate and sanitize paging parameters
    pub fn validate(self) -> Self {
        Self::new(self.page, self.size)
    }
}

/// Cursor paging parameters for list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorRequest {
    /// Opaque cursor returned by the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Number of items to fetch
    #[serde(default = "default_size")]
    pub size: u32,
}

impl CursorRequest {
    pub fn new(cursor: Option<String>, size: u32) -> Self {
        Self {
            cursor: cursor.filter(|c| !c.is_empty()),
            size: size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Whether this requests the first slice
    pub fn is_first(&self) -> bool {
        self.cursor.is_none()
    }
}

/// One page of results as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    /// `number` is the zero-based page index
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Self {
        Self {
            content,
            number,
            size,
            total_elements,
        }
    }

    /// Page answering the given request
    pub fn for_request(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self::new(content, request.zero_based_index(), request.size, total_elements)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page index
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total page count; an unsized page counts as a single page
    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 1;
        }
        let pages = self.total_elements.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// One slice of cursor-paged results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceCursor<T> {
    items: Vec<T>,
    current_cursor: Option<String>,
    next_cursor: Option<String>,
}

impl<T> SliceCursor<T> {
    pub fn of(items: Vec<T>, current_cursor: Option<String>, next_cursor: Option<String>) -> Self {
        Self {
            items,
            current_cursor,
            next_cursor,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_cursor(&self) -> Option<&str> {
        self.current_cursor.as_deref()
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// True when a non-empty next cursor is present
    pub fn has_next(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }
}

/// Paging mode discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageType {
    Offset,
    Cursor,
}

/// Paging metadata attached to every list response.
///
/// Serialized with a leading `type` discriminant followed by `returned` and
/// the fields of that mode only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PaginationMeta {
    #[serde(rename_all = "camelCase")]
    Offset {
        returned: usize,
        /// 1-based
        current_page: u32,
        total_pages: u32,
        total_elements: u64,
    },
    #[serde(rename_all = "camelCase")]
    Cursor {
        returned: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next_cursor: Option<String>,
    },
}

impl PaginationMeta {
    pub fn offset(
        returned: usize,
        current_page: u32,
        total_pages: u32,
        total_elements: u64,
    ) -> Self {
        PaginationMeta::Offset {
            returned,
            current_page,
            total_pages,
            total_elements,
        }
    }

    pub fn cursor(returned: usize, next_cursor: Option<String>) -> Self {
        PaginationMeta::Cursor {
            returned,
            next_cursor,
        }
    }

    pub fn page_type(&self) -> PageType {
        match self {
            PaginationMeta::Offset { .. } => PageType::Offset,
            PaginationMeta::Cursor { .. } => PageType::Cursor,
        }
    }

    /// Number of items in this page
    pub fn returned(&self) -> usize {
        match self {
            PaginationMeta::Offset { returned, .. } | PaginationMeta::Cursor { returned, .. } => {
                *returned
            }
        }
    }

    pub fn current_page(&self) -> Option<u32> {
        match self {
            PaginationMeta::Offset { current_page, .. } => Some(*current_page),
            PaginationMeta::Cursor { .. } => None,
        }
    }

    pub fn total_pages(&self) -> Option<u32> {
        match self {
            PaginationMeta::Offset { total_pages, .. } => Some(*total_pages),
            PaginationMeta::Cursor { .. } => None,
        }
    }

    pub fn total_elements(&self) -> Option<u64> {
        match self {
            PaginationMeta::Offset { total_elements, .. } => Some(*total_elements),
            PaginationMeta::Cursor { .. } => None,
        }
    }

    pub fn next_cursor(&self) -> Option<&str> {
        match self {
            PaginationMeta::Offset { .. } => None,
            PaginationMeta::Cursor { next_cursor, .. } => next_cursor.as_deref(),
        }
    }
}

/// List response envelope: `{"data": [...], "meta": {...}}`
///
/// `meta.returned()` always equals `data().len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationResponse<T> {
    data: Vec<T>,
    meta: PaginationMeta,
}

impl<T> PaginationResponse<T> {
    /// Offset response from a storage page; converts the page index to 1-based
    pub fn of_offset(page: Page<T>) -> Self {
        let current_page = page.number().saturating_add(1);
        let total_pages = page.total_pages();
        let total_elements = page.total_elements();
        let data = page.into_content();

        Self {
            meta: PaginationMeta::offset(data.len(), current_page, total_pages, total_elements),
            data,
        }
    }

    /// Offset response for callers that slice data themselves
    pub fn offset(data: Vec<T>, current_page: u32, total_pages: u32, total_elements: u64) -> Self {
        Self {
            meta: PaginationMeta::offset(data.len(), current_page, total_pages, total_elements),
            data,
        }
    }

    /// Cursor response from a slice
    pub fn of_cursor(slice: SliceCursor<T>) -> Self {
        let SliceCursor {
            items, next_cursor, ..
        } = slice;

        Self {
            meta: PaginationMeta::cursor(items.len(), next_cursor),
            data: items,
        }
    }

    /// Cursor response for callers that fetch data themselves
    pub fn cursor(data: Option<Vec<T>>, next_cursor: Option<String>) -> Self {
        let data = data.unwrap_or_default();
        Self {
            meta: PaginationMeta::cursor(data.len(), next_cursor),
            data,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    pub fn into_parts(self) -> (Vec<T>, PaginationMeta) {
        (self.data, self.meta)
    }

    /// Transform the data items, keeping the metadata
    pub fn map<U, F>(self, f: F) -> PaginationResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginationResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Constants
const DEFAULT_PAGE: u32 = 1;

/// Page size used when a client does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Smallest page size a client may request
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
