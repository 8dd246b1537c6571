//! The safe URL builder.

use eduscheme_id::Candidate;
use tracing::{debug, warn};

use crate::error::LinkError;

/// Returns true if a parameter name marks an identifier by convention.
///
/// Any name containing `id` or `Id` is treated as an identifier and must
/// coerce to a valid positive integer before it may appear in a URL.
#[must_use]
pub fn is_id_param(name: &str) -> bool {
    name.contains("id") || name.contains("Id")
}

/// Builds a relative URL from a base path and named parameters.
///
/// Parameters are processed in order:
/// - [`Candidate::Missing`] values are dropped with a `tracing` notice.
/// - Identifier parameters (per [`is_id_param`]) are coerced through
///   [`Candidate::to_valid_id`]; an invalid identifier fails the whole
///   build with [`LinkError::InvalidIdParam`].
/// - Other parameters are stringified as-is.
///
/// The query string is percent-encoded and appended with a leading `?`
/// only if at least one parameter survived.
pub fn create_safe_url<'a, I>(base_path: &str, params: I) -> Result<String, LinkError>
where
    I: IntoIterator<Item = (&'a str, Candidate)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut kept = 0usize;

    for (name, value) in params {
        if value.is_missing() {
            warn!(param = name, "skipping missing URL parameter");
            continue;
        }

        if is_id_param(name) {
            let Some(id) = value.to_valid_id() else {
                return Err(LinkError::InvalidIdParam {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            };
            serializer.append_pair(name, &id.to_string());
        } else {
            serializer.append_pair(name, &value.to_string());
        }
        kept += 1;
    }

    let url = if kept == 0 {
        base_path.to_string()
    } else {
        format!("{base_path}?{}", serializer.finish())
    };

    debug!(url = %url, "built safe URL");
    Ok(url)
}
