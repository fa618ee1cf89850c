use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::modules::hotel::core::ports::RepositoryError;

/// Display names are bounded on the way in; the store itself does not
/// constrain them.
pub const MAX_NAME_LEN: usize = 300;

/// Failure of a resource-oriented request, mapped onto a status code.
#[derive(Debug)]
pub enum ApiError {
    /// No row matched the requested identity.
    NotFound,
    /// The request body could not be decoded at all.
    Malformed(String),
    /// Decoded fields violated their bounds; one entry per field.
    Validation(Vec<(&'static str, &'static str)>),
    /// Path identity differs from payload identity on update.
    IdMismatch,
    /// Store failure, propagated without translation.
    Repository(RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Malformed(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation(fields) => {
                let errors: serde_json::Map<String, serde_json::Value> = fields
                    .into_iter()
                    .map(|(field, requirement)| (field.to_string(), json!(requirement)))
                    .collect();
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::IdMismatch => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "id mismatch between path and payload" })),
            )
                .into_response(),
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Repository(err)
    }
}

pub(crate) fn require_name(name: &str) -> Result<(), ApiError> {
    let mut violations = Vec::new();
    if name.trim().is_empty() {
        violations.push(("name", "must not be empty"));
    } else if name.chars().count() > MAX_NAME_LEN {
        violations.push(("name", "must be at most 300 characters"));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(violations))
    }
}
