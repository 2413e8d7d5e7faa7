//! Route handlers
//!
//! Domain endpoints (user, auth, content, collection, bookmark, taste,
//! search) register under `/api/v1`; this module only carries the
//! cross-cutting ones.

pub mod system;

pub use system::{api_index, health_check, not_found};
