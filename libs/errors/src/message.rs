//! Normalizing arbitrary error payloads into human-readable messages.

use serde_json::Value;
use tracing::error;

use crate::shape::{classify, ErrorShape};

/// The fixed fallback sentence for unrecognizable errors.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred";

/// Converts any error payload into a single, non-empty, human-readable
/// message.
///
/// Resolution follows the shape priority of [`classify`](crate::classify):
/// bare text, `message` wrapping, REST `detail` bodies (string or list),
/// `error` wrappers, bare HTTP statuses, then a compact serialization as
/// a last resort. Never panics and never returns an empty string.
#[must_use]
pub fn safe_error_message(value: &Value) -> String {
    match classify(value) {
        ErrorShape::Absent => FALLBACK_MESSAGE.to_string(),
        ErrorShape::Text(s) => non_empty(s.trim()),
        ErrorShape::Message(inner) => safe_error_message(&inner),
        ErrorShape::Detail(detail) => detail_message(&detail),
        ErrorShape::Wrapped(inner) => safe_error_message(&inner),
        ErrorShape::Http {
            status,
            status_text,
        } => format!(
            "HTTP {status}: {}",
            status_text.as_deref().unwrap_or("Request failed")
        ),
        ErrorShape::Opaque(v) => serialized_message(&v),
    }
}

fn detail_message(detail: &Value) -> String {
    match detail {
        Value::String(s) => non_empty(s.trim()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(safe_error_message)
                .collect::<Vec<_>>()
                .join(", ");
            non_empty(&joined)
        }
        other => safe_error_message(other),
    }
}

fn serialized_message(value: &Value) -> String {
    let serialized = value.to_string();
    if serialized.is_empty() || serialized == "{}" {
        FALLBACK_MESSAGE.to_string()
    } else {
        serialized
    }
}

fn non_empty(s: &str) -> String {
    if s.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        s.to_string()
    }
}

/// Normalizes a native Rust error value.
///
/// The `Display` form of an error is already a message, so this only
/// guards against empty output.
#[must_use]
pub fn safe_display_message(err: &(dyn std::error::Error + 'static)) -> String {
    non_empty(err.to_string().trim())
}

/// Normalizes and logs an error payload, with optional context.
pub fn log_error(value: &Value, context: Option<&str>) {
    let message = safe_error_message(value);
    match context {
        Some(context) => error!(context = context, "{message}"),
        None => error!("{message}"),
    }
}
