//! Number-squaring endpoint.

use axum::Json;
use axum::body::Bytes;
use domain::NumberRequest;

use crate::error::ApiError;

/// POST /square — squares the integer in the request body.
///
/// The body must be `{"number": <integer>}`; anything else is rejected
/// with HTTP 422 before any computation runs. The 200 response body is
/// the decimal string of `number * number` as a JSON string (input `4`
/// yields the body `"16"`).
#[tracing::instrument(skip(body))]
pub async fn compute(body: Bytes) -> Result<Json<String>, ApiError> {
    let req = NumberRequest::from_json(&body)?;
    Ok(Json(req.square().to_string()))
}
