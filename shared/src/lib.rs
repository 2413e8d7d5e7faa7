//! Shared contract types for the Flint server
//!
//! This crate provides the pieces every module and endpoint agrees on:
//! - Error taxonomy, domain failure signal and problem response body
//! - Offset and cursor pagination envelopes
//! - Configuration types
//! - Collection helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LoggingConfig, ServerConfig};
pub use errors::{AppError, ErrorCode, GeneralError, GeneralResult, ProblemDetail};
pub use types::{
    CursorRequest, HealthResponse, Page, PageRequest, PageType, PaginationMeta,
    PaginationResponse, SliceCursor,
};
pub use utils::{extract_id_list, extract_id_set, HasId};
