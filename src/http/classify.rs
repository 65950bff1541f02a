//! Response classification
//!
//! Order matters: the HTTP status is checked first, then an `error` object
//! embedded in an otherwise successful body.

use crate::error::{ApiErrorKind, Error, Result};
use crate::types::JsonValue;

/// Turn a raw status and body into a JSON payload or a classified error
pub fn classify_response(status: u16, body: &str) -> Result<JsonValue> {
    if let Some(kind) = classify_status(status, body) {
        return Err(api_error(kind, status, body, first_reason_from_str(body)));
    }

    let value: JsonValue = serde_json::from_str(body)?;
    if let Some(error) = value.get("error") {
        let reason = first_reason(error);
        let kind = reason.map_or(ApiErrorKind::Generic, ApiErrorKind::from_reason);
        return Err(api_error(kind, status, body, reason));
    }

    Ok(value)
}

/// Kind for a failing status, `None` for success
fn classify_status(status: u16, body: &str) -> Option<ApiErrorKind> {
    match status {
        200..=299 => None,
        401 => Some(ApiErrorKind::Authentication),
        403 => {
            if body.to_lowercase().contains("quota") {
                Some(ApiErrorKind::QuotaExceeded)
            } else if body.contains("rateLimit") || body.contains("rate limit") {
                Some(ApiErrorKind::RateLimit)
            } else {
                Some(ApiErrorKind::Generic)
            }
        }
        404 => Some(ApiErrorKind::NotFound),
        400 => Some(ApiErrorKind::InvalidRequest),
        _ => Some(ApiErrorKind::Generic),
    }
}

/// Reason code of the first entry in an error object's `errors` array
///
/// Later entries are ignored.
pub fn first_reason(error: &JsonValue) -> Option<&str> {
    error
        .get("errors")?
        .get(0)?
        .get("reason")?
        .as_str()
        .filter(|r| !r.is_empty())
}

fn first_reason_from_str(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    first_reason(value.get("error")?).map(str::to_string)
}

fn api_error(
    kind: ApiErrorKind,
    status: u16,
    body: &str,
    reason: Option<impl Into<String>>,
) -> Error {
    match reason {
        Some(reason) => Error::api_with_reason(kind, status, reason, body),
        None => Error::api(kind, status, body),
    }
}
