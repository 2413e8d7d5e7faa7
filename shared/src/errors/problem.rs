//! Problem response body (RFC 9457 flavoured)

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::failure::GeneralError;
use super::kind::AppError;

/// Media type used for problem bodies
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Wire representation of any failure.
///
/// Fields are always written in the order `title`, `status`, `detail`,
/// `instance`, `errorCode`, `additionalInfo`; clients depend on it.
/// `additionalInfo` is left out entirely when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    title: String,
    status: u16,
    detail: String,
    instance: String,
    error_code: String,
    #[serde(default)]
    additional_info: Option<BTreeMap<String, String>>,
}

impl ProblemDetail {
    /// Problem using the kind's own detail text
    pub fn of(error: &dyn AppError, instance: impl Into<String>) -> Self {
        Self::with_detail(error, error.detail(), instance)
    }

    /// Problem with a custom detail message
    pub fn with_detail(
        error: &dyn AppError,
        detail: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self::with_additional_info(error, detail, instance, None)
    }

    /// Problem carrying additional per-field information
    pub fn with_additional_info(
        error: &dyn AppError,
        detail: impl Into<String>,
        instance: impl Into<String>,
        additional_info: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            title: error.title().to_string(),
            status: error.http_status(),
            detail: detail.into(),
            instance: instance.into(),
            error_code: error.code().to_string(),
            additional_info: additional_info.filter(|info| !info.is_empty()),
        }
    }

    /// Problem built from a domain failure and its resolved detail
    pub fn from_failure(failure: &GeneralError, instance: impl Into<String>) -> Self {
        Self::with_detail(failure.kind(), failure.detail(), instance)
    }

    /// Replace the status, e.g. with the one actually sent on the response
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Path of the request that failed
    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn additional_info(&self) -> Option<&BTreeMap<String, String>> {
        self.additional_info.as_ref()
    }
}

impl Serialize for ProblemDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProblemDetail", 6)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("detail", &self.detail)?;
        state.serialize_field("instance", &self.instance)?;
        state.serialize_field("errorCode", &self.error_code)?;
        match self.additional_info.as_ref().filter(|info| !info.is_empty()) {
            Some(info) => state.serialize_field("additionalInfo", info)?,
            None => state.skip_field("additionalInfo")?,
        }
        state.end()
    }
}
