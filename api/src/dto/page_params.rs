use flint_shared::types::{
    CursorRequest, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::handlers::{validate_request, ValidationFailure};

/// Query string of offset-paged list endpoints: `?page=1&size=20`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OffsetPageParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be 1 or greater"))]
    pub page: u32,
    #[serde(default = "default_size")]
    #[validate(range(
        min = MIN_PAGE_SIZE,
        max = MAX_PAGE_SIZE,
        message = "size must be between 1 and 100"
    ))]
    pub size: u32,
}

impl OffsetPageParams {
    /// Validate and convert into a storage page request
    pub fn to_page_request(&self) -> Result<PageRequest, ValidationFailure> {
        validate_request(self, "offsetPageParams")?;
        Ok(PageRequest::new(self.page, self.size))
    }
}

/// Query string of cursor-paged list endpoints: `?cursor=...&size=20`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CursorPageParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "cursor must not be empty"))]
    pub cursor: Option<String>,
    #[serde(default = "default_size")]
    #[validate(range(
        min = MIN_PAGE_SIZE,
        max = MAX_PAGE_SIZE,
        message = "size must be between 1 and 100"
    ))]
    pub size: u32,
}

impl CursorPageParams {
    /// Validate and convert into a storage cursor request
    pub fn to_cursor_request(&self) -> Result<CursorRequest, ValidationFailure> {
        validate_request(self, "cursorPageParams")?;
        Ok(CursorRequest::new(self.cursor.clone(), self.size))
    }
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
