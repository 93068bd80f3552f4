use application::ServiceError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::DomainError;
use serde_json::{json, Map, Value};
use validator::ValidationErrors;

/// HTTP-facing error. Every handler failure funnels through here so error
/// bodies share one shape: `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Service(service) => classify_service_error(service),
            ApiError::Validation(errors) => {
                let body = json!({
                    "error": "One or more fields are invalid",
                    "code": "VALIDATION_ERROR",
                    "fields": field_messages(errors),
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}

fn classify_service_error(err: &ServiceError) -> (StatusCode, &'static str, String) {
    match err {
        ServiceError::Domain(domain) if domain.is_validation() => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            domain.to_string(),
        ),
        ServiceError::Domain(DomainError::ConcurrencyConflict(msg)) => {
            (StatusCode::CONFLICT, "CONFLICT", msg.clone())
        }
        ServiceError::ConcurrencyConflict { message, source } => {
            tracing::warn!(error = %source, "Update rejected by concurrency check");
            (StatusCode::CONFLICT, "CONFLICT", message.clone())
        }
        ServiceError::Unexpected { message, source } => {
            tracing::error!(error = %source, "Unexpected service error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message.clone(),
            )
        }
        ServiceError::Domain(other) => {
            tracing::error!(error = %other, "Repository error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

fn field_messages(errors: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), json!(messages))
        })
        .collect();

    Value::Object(fields)
}
