//! The structured application error record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::message::{safe_error_message, FALLBACK_MESSAGE};

/// Sentinel code for errors whose source exposes no code of its own.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// A normalized application error.
///
/// `message` is always non-empty and human-readable; the remaining
/// fields carry whatever structure the source payload exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct AppError {
    /// Human-readable message, already normalized.
    pub message: String,
    /// HTTP status, defaulting to 500.
    pub status: u16,
    /// Machine-readable code, defaulting to [`UNKNOWN_ERROR_CODE`].
    pub code: String,
    /// Structured details from the source payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    /// Builds a normalized error from an arbitrary payload.
    ///
    /// See [`create_app_error`] for the field derivation rules.
    #[must_use]
    pub fn from_value(value: &Value, default_message: &str, status: Option<u16>) -> Self {
        let normalized = safe_error_message(value);
        let message = if normalized == FALLBACK_MESSAGE && !default_message.trim().is_empty() {
            default_message.to_string()
        } else {
            normalized
        };

        let status = status
            .or_else(|| payload_status(value))
            .unwrap_or(500);

        let code = value
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_CODE)
            .to_string();

        let details = value
            .get("details")
            .or_else(|| value.get("data"))
            .filter(|v| !v.is_null())
            .cloned();

        Self {
            message,
            status,
            code,
            details,
        }
    }
}

/// Wraps [`safe_error_message`] into a structured [`AppError`].
///
/// The status falls back to the payload's `status`/`statusCode`, then to
/// 500; the code falls back to [`UNKNOWN_ERROR_CODE`]; details come from
/// the payload's `details` or `data` field. The default message is used
/// only when normalization produced nothing better than the generic
/// fallback sentence.
#[must_use]
pub fn create_app_error(value: &Value, default_message: &str, status: Option<u16>) -> AppError {
    AppError::from_value(value, default_message, status)
}

fn payload_status(value: &Value) -> Option<u16> {
    value
        .get("status")
        .or_else(|| value.get("statusCode"))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_fields_from_payload() {
        let value = json!({
            "detail": "Subject name already exists",
            "status": 409,
            "code": "DUPLICATE_SUBJECT",
            "details": {"field": "name"}
        });
        let err = create_app_error(&value, "Could not save subject", None);
        assert_eq!(err.message, "Subject name already exists");
        assert_eq!(err.status, 409);
        assert_eq!(err.code, "DUPLICATE_SUBJECT");
        assert_eq!(err.details, Some(json!({"field": "name"})));
    }

    #[test]
    fn defaults_apply_for_bare_payloads() {
        let err = create_app_error(&json!(null), "Could not load terms", None);
        assert_eq!(err.message, "Could not load terms");
        assert_eq!(err.status, 500);
        assert_eq!(err.code, UNKNOWN_ERROR_CODE);
        assert_eq!(err.details, None);
    }

    #[test]
    fn explicit_status_wins_over_payload() {
        let err = create_app_error(&json!({"statusCode": 404}), "x", Some(502));
        assert_eq!(err.status, 502);
    }

    #[test]
    fn data_field_feeds_details() {
        let err = create_app_error(&json!({"error": "nope", "data": [1, 2]}), "x", None);
        assert_eq!(err.details, Some(json!([1, 2])));
    }

    #[test]
    fn displays_as_its_message() {
        let err = create_app_error(&json!("boom"), "x", None);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn serde_roundtrip() {
        let err = create_app_error(&json!({"detail": "D", "status": 422}), "x", None);
        let json = serde_json::to_string(&err).unwrap();
        let back: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
