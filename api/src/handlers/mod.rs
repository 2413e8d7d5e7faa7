//! Failure handling at the HTTP boundary
//!
//! - `failure` - the closed set of failure classes a handler can return
//! - `problem` - translation of those failures into problem responses

pub mod failure;
pub mod problem;

pub use failure::{validate_request, ApiFailure, FieldViolation, ValidationFailure};
pub use problem::{
    translate, ApiError, ApiResult, ProblemResultExt, RequestContext, REQUEST_ID_HEADER,
};
