//! Type definitions module with domain-specific sub-modules
//!
//! - `pagination` - Offset and cursor pagination envelopes for list endpoints
//! - `response` - Health check responses

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::{
    CursorRequest, Page, PageRequest, PageType, PaginationMeta, PaginationResponse, SliceCursor,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use response::{HealthResponse, HealthStatus};
