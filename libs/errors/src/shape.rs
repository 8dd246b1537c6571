//! Decoding unknown error payloads against the known shapes.

use serde_json::Value;

/// The error payload shapes the REST backend and its client produce,
/// in decode priority order.
///
/// Matching is first-wins: a payload with both `message` and `detail`
/// decodes as [`ErrorShape::Message`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorShape {
    /// No payload at all (JSON `null`).
    Absent,
    /// A bare string.
    Text(String),
    /// An error-like object with a `message` field (one level of
    /// wrapping).
    Message(Value),
    /// A REST-framework body: `detail` is a non-empty string or a list
    /// of nested errors. A `detail` of any other type falls through to
    /// the later rungs.
    Detail(Value),
    /// A generic wrapper object with an `error` field.
    Wrapped(Value),
    /// An object that only exposes an HTTP status.
    Http {
        status: u16,
        status_text: Option<String>,
    },
    /// Anything else.
    Opaque(Value),
}

/// Decodes a payload against the known shapes.
#[must_use]
pub fn classify(value: &Value) -> ErrorShape {
    match value {
        Value::Null => ErrorShape::Absent,
        Value::String(s) => ErrorShape::Text(s.clone()),
        Value::Object(map) => {
            if let Some(message) = map.get("message") {
                return ErrorShape::Message(message.clone());
            }
            if let Some(detail) = map.get("detail") {
                if is_detail_body(detail) {
                    return ErrorShape::Detail(detail.clone());
                }
            }
            if let Some(inner) = map.get("error") {
                return ErrorShape::Wrapped(inner.clone());
            }
            if let Some(status) = status_code(map) {
                let status_text = map
                    .get("statusText")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                return ErrorShape::Http {
                    status,
                    status_text,
                };
            }
            ErrorShape::Opaque(value.clone())
        }
        other => ErrorShape::Opaque(other.clone()),
    }
}

/// A `detail` field only carries the message when it is a non-empty
/// string or a list; anything else (empty text, numbers, objects) is
/// not a usable REST body and later rungs may still match.
fn is_detail_body(detail: &Value) -> bool {
    match detail {
        Value::String(s) => !s.is_empty(),
        Value::Array(_) => true,
        _ => false,
    }
}

fn status_code(map: &serde_json::Map<String, Value>) -> Option<u16> {
    map.get("status")
        .or_else(|| map.get("statusCode"))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_absent() {
        assert_eq!(classify(&json!(null)), ErrorShape::Absent);
    }

    #[test]
    fn message_takes_priority_over_detail() {
        let shape = classify(&json!({"message": "boom", "detail": "ignored"}));
        assert_eq!(shape, ErrorShape::Message(json!("boom")));
    }

    #[test]
    fn detail_before_wrapped_before_http() {
        assert_eq!(
            classify(&json!({"detail": "bad input", "error": "x"})),
            ErrorShape::Detail(json!("bad input"))
        );
        assert_eq!(
            classify(&json!({"error": "x", "status": 500})),
            ErrorShape::Wrapped(json!("x"))
        );
        assert_eq!(
            classify(&json!({"status": 404, "statusText": "Not Found"})),
            ErrorShape::Http {
                status: 404,
                status_text: Some("Not Found".to_string())
            }
        );
    }

    #[test]
    fn unusable_detail_falls_through_to_later_rungs() {
        assert_eq!(
            classify(&json!({"detail": "", "error": "real"})),
            ErrorShape::Wrapped(json!("real"))
        );
        assert_eq!(
            classify(&json!({"detail": {"loc": "name"}, "status": 404})),
            ErrorShape::Http {
                status: 404,
                status_text: None
            }
        );
        assert_eq!(
            classify(&json!({"detail": 42})),
            ErrorShape::Opaque(json!({"detail": 42}))
        );
        // Arrays stay on the detail rung, empty or not.
        assert_eq!(
            classify(&json!({"detail": [], "error": "x"})),
            ErrorShape::Detail(json!([]))
        );
    }

    #[test]
    fn status_code_alias_is_recognized() {
        assert_eq!(
            classify(&json!({"statusCode": 422})),
            ErrorShape::Http {
                status: 422,
                status_text: None
            }
        );
    }

    #[test]
    fn everything_else_is_opaque() {
        assert_eq!(classify(&json!(42)), ErrorShape::Opaque(json!(42)));
        assert_eq!(
            classify(&json!({"weird": true})),
            ErrorShape::Opaque(json!({"weird": true}))
        );
        assert_eq!(classify(&json!([1, 2])), ErrorShape::Opaque(json!([1, 2])));
    }
}
