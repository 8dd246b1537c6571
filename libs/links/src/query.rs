//! Query-string parsing helpers.
//!
//! Thin wrappers over `form_urlencoded` for pulling parameters back out
//! of a query string, with an ID-aware variant that applies the strict
//! identifier grammar.

use eduscheme_id::{Candidate, EntityId};

/// Decodes a query string (without the leading `?`) into name/value pairs.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Returns the first value of a parameter, if present.
#[must_use]
pub fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// Returns the first value of a parameter coerced to a valid entity ID.
///
/// `None` both when the parameter is absent and when its value fails the
/// identifier grammar, matching how callers treat the two cases (render
/// the unfiltered view).
#[must_use]
pub fn id_query_param(query: &str, name: &str) -> Option<EntityId> {
    query_param(query, name).and_then(|v| Candidate::Text(v).to_valid_id())
}
