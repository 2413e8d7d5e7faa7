//! Closed set of failures a request can end with

use flint_shared::errors::GeneralError;
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Key used by `validator` for violations not tied to a single field
const SCHEMA_LEVEL_KEY: &str = "__all__";

/// Every failure class the translator knows how to answer.
///
/// Adding a variant makes `handlers::problem::translate` fail to compile
/// until the new class is mapped.
#[derive(Error, Debug)]
pub enum ApiFailure {
    /// Recognized business-rule violation
    #[error(transparent)]
    Domain(#[from] GeneralError),

    /// Request body or query failed field-level validation
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// A required request parameter was not supplied
    #[error("missing required parameter `{name}`")]
    MissingParameter { name: String },

    /// No route or resource matches the request path
    #[error("no resource matches the request path")]
    NotFound,

    /// Anything else; treated as an internal defect
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl ApiFailure {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        ApiFailure::MissingParameter { name: name.into() }
    }
}

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field; `None` when the constraint spans the whole object
    pub field: Option<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn object(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Validation failure for one request object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed for `{object_name}` ({} violation(s))", .violations.len())]
pub struct ValidationFailure {
    object_name: String,
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn new(object_name: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self {
            object_name: object_name.into(),
            violations,
        }
    }

    /// Convert `validator` output for the object called `object_name`.
    ///
    /// Nested violations are keyed by their dotted path, e.g. `address.city`
    /// or `contacts[1].email`.
    pub fn from_validator(object_name: impl Into<String>, errors: &ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(None, errors, &mut violations);
        Self::new(object_name, violations)
    }

    /// Name of the validated object, used as key for object-level violations
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

fn collect_violations(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldViolation>,
) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let field = field.to_string();
        let path = match (prefix, field == SCHEMA_LEVEL_KEY) {
            (None, true) => None,
            (Some(prefix), true) => Some(prefix.to_string()),
            (None, false) => Some(field),
            (Some(prefix), false) => Some(format!("{}.{}", prefix, field)),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_violations(path.as_deref(), nested, out)
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item = format!("{}[{}]", path.as_deref().unwrap_or_default(), index);
                    collect_violations(Some(&item), nested, out);
                }
            }
        }
    }
}

/// Run `validator` rules on a request object named `object_name`
pub fn validate_request<T: Validate>(
    value: &T,
    object_name: &str,
) -> Result<(), ValidationFailure> {
    value
        .validate()
        .map_err(|errors| ValidationFailure::from_validator(object_name, &errors))
}
