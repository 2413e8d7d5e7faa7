//! Error taxonomy, failure signal and problem response model
//!
//! - `kind` - the [`AppError`] capability trait and the common [`ErrorCode`] kinds
//! - `failure` - [`GeneralError`], the only channel for business-rule violations
//! - `problem` - [`ProblemDetail`], the wire body of every error response

pub mod failure;
pub mod kind;
pub mod problem;

pub use failure::{BoxedCause, GeneralError, GeneralResult};
pub use kind::{format_detail, AppError, ErrorCode};
pub use problem::{ProblemDetail, APPLICATION_PROBLEM_JSON};
