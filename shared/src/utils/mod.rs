//! Common utility functions

pub mod extract;

// Re-export commonly used utilities
pub use extract::*;
