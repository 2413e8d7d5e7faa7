//! Failure signal raised by business logic

use std::error::Error as StdError;
use std::fmt::Display;
use thiserror::Error;

use super::kind::AppError;

/// Boxed underlying error kept for diagnostics
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// A recognized business-rule violation.
///
/// Carries one error kind, the resolved detail message, and optionally the
/// technical error that triggered it. The cause is never shown to clients.
#[derive(Error, Debug)]
#[error("{detail}")]
pub struct GeneralError {
    kind: Box<dyn AppError>,
    detail: String,
    #[source]
    cause: Option<BoxedCause>,
}

impl GeneralError {
    /// Failure using the kind's detail verbatim
    pub fn new(kind: impl AppError) -> Self {
        let detail = kind.detail().to_string();
        Self {
            kind: Box::new(kind),
            detail,
            cause: None,
        }
    }

    /// Failure whose detail is the kind's template formatted with `args`
    pub fn with_args(kind: impl AppError, args: &[&dyn Display]) -> Self {
        let detail = kind.format(args);
        Self {
            kind: Box::new(kind),
            detail,
            cause: None,
        }
    }

    /// Failure wrapping an underlying error
    pub fn with_cause(kind: impl AppError, cause: impl Into<BoxedCause>) -> Self {
        let detail = kind.detail().to_string();
        Self {
            kind: Box::new(kind),
            detail,
            cause: Some(cause.into()),
        }
    }

    /// Failure wrapping an underlying error, with a formatted detail
    pub fn with_cause_and_args(
        kind: impl AppError,
        cause: impl Into<BoxedCause>,
        args: &[&dyn Display],
    ) -> Self {
        let detail = kind.format(args);
        Self {
            kind: Box::new(kind),
            detail,
            cause: Some(cause.into()),
        }
    }

    pub fn kind(&self) -> &dyn AppError {
        self.kind.as_ref()
    }

    /// Resolved detail message
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Shortcut for `self.kind().code()`
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Shortcut for `self.kind().http_status()`
    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }
}

/// Result type for operations that signal business failures
pub type GeneralResult<T> = Result<T, GeneralError>;
