//! Global failure translator
//!
//! Every failing request passes through [`translate`] exactly once. It picks
//! the status and [`ProblemDetail`] body for the failure class and records a
//! diagnostic log line; internal details never reach the response body.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use flint_shared::errors::{
    AppError, ErrorCode, GeneralError, ProblemDetail, APPLICATION_PROBLEM_JSON,
};
use log::{debug, error, warn};
use uuid::Uuid;

use super::failure::ApiFailure;

/// Header carrying the caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Detail returned for every validation failure
pub const VALIDATION_DETAIL: &str = "Input is invalid.";

/// Request facts the translator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub request_id: String,
}

impl RequestContext {
    pub fn new(path: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            request_id: request_id.into(),
        }
    }

    /// Extract the path and request id, generating an id when none was sent
    pub fn from_request(req: &HttpRequest) -> Self {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self::new(req.path(), request_id)
    }
}

/// Map a failure to its HTTP status and problem body.
///
/// Total over [`ApiFailure`]: it never fails and never panics.
pub fn translate(failure: &ApiFailure, ctx: &RequestContext) -> (StatusCode, ProblemDetail) {
    let (status, problem) = match failure {
        ApiFailure::Domain(general) => {
            log_general_error(general, ctx);
            (
                status_of(general.kind()),
                ProblemDetail::from_failure(general, &ctx.path),
            )
        }
        ApiFailure::Validation(validation) => {
            let kind = ErrorCode::InvalidInput;

            // One entry per field; a later violation of the same field wins
            let mut info = BTreeMap::new();
            for violation in validation.violations() {
                let key = violation
                    .field
                    .as_deref()
                    .unwrap_or(validation.object_name());
                info.insert(key.to_string(), violation.message.clone());
            }

            warn!(
                "[{}] Input validation failed at {}: {:?}",
                ctx.request_id, ctx.path, info
            );

            let problem = ProblemDetail::with_additional_info(
                &kind,
                VALIDATION_DETAIL,
                &ctx.path,
                Some(info),
            );
            (status_of(&kind), problem)
        }
        ApiFailure::MissingParameter { name } => {
            let kind = ErrorCode::MissingParameter;
            warn!(
                "[{}] Missing request parameter at {}: {}",
                ctx.request_id, ctx.path, name
            );
            let problem = ProblemDetail::with_detail(&kind, kind.format(&[name]), &ctx.path);
            (status_of(&kind), problem)
        }
        ApiFailure::NotFound => {
            let kind = ErrorCode::NotFound;
            debug!("[{}] No resource for {}", ctx.request_id, ctx.path);
            (status_of(&kind), ProblemDetail::of(&kind, &ctx.path))
        }
        ApiFailure::Unclassified(err) => {
            let kind = ErrorCode::InternalServerError;
            error!(
                "[{}] Unexpected error at {}: {:?}",
                ctx.request_id, ctx.path, err
            );
            (status_of(&kind), ProblemDetail::of(&kind, &ctx.path))
        }
    };

    // Body status always matches the status line
    (status, problem.with_status(status.as_u16()))
}

fn log_general_error(general: &GeneralError, ctx: &RequestContext) {
    match general.cause() {
        Some(cause) => warn!(
            "[{}] GeneralError at {}: {} - {} (cause: {})",
            ctx.request_id,
            ctx.path,
            general.code(),
            general.detail(),
            cause
        ),
        None => warn!(
            "[{}] GeneralError at {}: {} - {}",
            ctx.request_id,
            ctx.path,
            general.code(),
            general.detail()
        ),
    }
}

/// Status for a kind; anything outside 100..=599 is sent as 500
fn status_of(kind: &dyn AppError) -> StatusCode {
    match kind.http_status() {
        code @ 100..=599 => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        code => {
            warn!("Error kind {} declares invalid HTTP status {}", kind.code(), code);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Translated failure, ready to be written as a response
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    problem: ProblemDetail,
}

impl ApiError {
    /// Translate `failure` for the request it ended
    pub fn new(failure: impl Into<ApiFailure>, req: &HttpRequest) -> Self {
        Self::with_context(failure, &RequestContext::from_request(req))
    }

    pub fn with_context(failure: impl Into<ApiFailure>, ctx: &RequestContext) -> Self {
        let (status, problem) = translate(&failure.into(), ctx);
        Self { status, problem }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn problem(&self) -> &ProblemDetail {
        &self.problem
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem.detail())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        match serde_json::to_string(&self.problem) {
            Ok(body) => HttpResponse::build(self.status)
                .insert_header((header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON))
                .body(body),
            Err(err) => {
                error!("Failed to serialize problem body: {}", err);
                HttpResponse::build(self.status).finish()
            }
        }
    }
}

/// Convenience alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Attach the request to a failing result at the handler boundary
pub trait ProblemResultExt<T> {
    fn or_problem(self, req: &HttpRequest) -> ApiResult<T>;
}

impl<T, E> ProblemResultExt<T> for Result<T, E>
where
    E: Into<ApiFailure>,
{
    fn or_problem(self, req: &HttpRequest) -> ApiResult<T> {
        self.map_err(|err| ApiError::new(err, req))
    }
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let failure = GeneralError::with_cause(ErrorCode::BadRequest, err.to_string());
    ApiError::new(failure, req).into()
}

/// Error handler for `web::QueryConfig`; a missing field names the parameter
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let failure = match missing_field(&message) {
        Some(name) => ApiFailure::missing_parameter(name),
        None => GeneralError::with_cause(ErrorCode::BadRequest, message).into(),
    };
    ApiError::new(failure, req).into()
}

/// Error handler for `web::PathConfig`
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let failure = GeneralError::with_cause(ErrorCode::BadRequest, err.to_string());
    ApiError::new(failure, req).into()
}

/// Field name from a serde "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    let (name, _) = rest.split_once('`')?;
    Some(name).filter(|name| !name.is_empty())
}
