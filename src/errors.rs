use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

/// Result type returned by service-layer operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A single field-level failure reported back to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Closed set of application errors; each variant fixes an HTTP status code.
///
/// Variants are listed in the dispatch order of the normalizing layer:
/// schema-level failures are matched before the generic shapes so they are
/// reported with per-field detail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Raw schema validation failure from the `validator` crate.
    #[error("validation error")]
    Schema(#[from] ValidationErrors),
    /// A value could not be interpreted for the given path.
    #[error("invalid value for {path}: {value}")]
    Cast { path: String, value: String },
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request is malformed or not allowed in the current state.
    #[error("{0}")]
    BadRequest(String),
    /// A uniqueness constraint rejected the write.
    #[error("a record with this {field} already exists")]
    Conflict { field: String },
    /// Typed validation failure carrying field-level detail.
    #[error("validation error")]
    Validation(Vec<FieldError>),
    /// Reserved for authenticated routes.
    #[error("{0}")]
    Unauthorized(String),
    /// Reserved for role-guarded routes.
    #[error("{0}")]
    Forbidden(String),
    /// Anything unexpected; the detail is only exposed outside production.
    #[error("an unexpected error occurred")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }

    pub fn cast(path: impl Into<String>, value: impl Into<String>) -> Self {
        ApiError::Cast {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }

    /// Coarse classification: `fail` for client errors, `error` for server
    /// errors.
    pub fn classification(&self) -> &'static str {
        if self.status_code().is_client_error() {
            "fail"
        } else {
            "error"
        }
    }

    /// Whether this is an expected domain failure rather than a bug.
    pub fn is_operational(&self) -> bool {
        !matches!(self, ApiError::Internal(_))
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::not_found("resource not found"),
            RepositoryError::Conflict { field } => ApiError::Conflict { field },
            RepositoryError::Pool(e) => ApiError::internal(e.to_string()),
            RepositoryError::Database(e) => ApiError::internal(e.to_string()),
        }
    }
}

/// Uniform JSON error body: `{success: false, message, errors?}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Schema(_) => StatusCode::BAD_REQUEST,
            ApiError::Cast { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_operational() {
            log::warn!("request {}: {self}", self.classification());
        } else {
            log::error!("request {}: {self}", self.classification());
        }

        let errors = match self {
            ApiError::Schema(errors) => Some(collect_field_errors(errors)),
            ApiError::Validation(errors) => Some(errors.clone()),
            _ => None,
        };

        let detail = match self {
            ApiError::Internal(detail) if !is_production() => Some(detail.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            errors,
            detail,
        })
    }
}

/// Flatten `validator` errors into `{field, message}` entries, sorted by
/// field for a stable response shape.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("invalid value for {field}")),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Map malformed JSON request bodies into the uniform error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("invalid request body: {err}")).into()
}

fn is_production() -> bool {
    std::env::var("APP_ENV").is_ok_and(|env| env == "production")
}
