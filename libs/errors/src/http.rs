//! User-facing messages for HTTP status codes.

/// Maps common HTTP status codes to fixed user-facing sentences.
///
/// Unmapped codes fall back to a generic sentence carrying the code.
#[must_use]
pub fn http_error_message(status: u16) -> String {
    match status {
        400 => "Bad request. Please check your input and try again.".to_string(),
        401 => "You are not authorized. Please log in and try again.".to_string(),
        403 => "You do not have permission to access this resource.".to_string(),
        404 => "The requested resource was not found.".to_string(),
        409 => "This resource already exists. Please use a different name.".to_string(),
        422 => "Please check your input for validation errors.".to_string(),
        429 => "Too many requests. Please wait a moment and try again.".to_string(),
        500 => "Internal server error. Please try again later.".to_string(),
        502 => "Bad gateway. The server is temporarily unavailable.".to_string(),
        503 => "Service unavailable. Please try again later.".to_string(),
        504 => "Gateway timeout. Please try again later.".to_string(),
        other => format!("HTTP {other}: An error occurred while processing your request."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400, "Bad request. Please check your input and try again.")]
    #[case(401, "You are not authorized. Please log in and try again.")]
    #[case(403, "You do not have permission to access this resource.")]
    #[case(404, "The requested resource was not found.")]
    #[case(409, "This resource already exists. Please use a different name.")]
    #[case(422, "Please check your input for validation errors.")]
    #[case(429, "Too many requests. Please wait a moment and try again.")]
    #[case(500, "Internal server error. Please try again later.")]
    #[case(502, "Bad gateway. The server is temporarily unavailable.")]
    #[case(503, "Service unavailable. Please try again later.")]
    #[case(504, "Gateway timeout. Please try again later.")]
    fn mapped_codes(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(http_error_message(status), expected);
    }

    #[rstest]
    #[case(418)]
    #[case(599)]
    fn unmapped_codes_carry_the_status(#[case] status: u16) {
        let message = http_error_message(status);
        assert!(message.starts_with(&format!("HTTP {status}:")));
    }
}
