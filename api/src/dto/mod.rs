//! Request and response DTOs shared by list endpoints

pub mod page_params;

pub use page_params::{CursorPageParams, OffsetPageParams};
