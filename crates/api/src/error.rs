//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::ValidationError;
use serde::Serialize;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed schema validation.
    Validation(ValidationError),
}

/// One entry of the `detail` array in a validation failure body.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Body of an HTTP 422 response: `{"detail": [{"loc", "msg", "type"}]}`.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<ErrorDetail>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                let body = ValidationErrorBody {
                    detail: vec![ErrorDetail {
                        loc: err.loc(),
                        msg: err.to_string(),
                        kind: err.kind(),
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}
