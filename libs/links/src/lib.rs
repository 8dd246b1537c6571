//! # eduscheme-links
//!
//! Safe URL construction, named route builders, query-string helpers,
//! and URL diagnostics for EduScheme.
//!
//! ## Design Principles
//!
//! - A malformed identifier in a navigation target is worse than no
//!   navigation at all: building a URL with an invalid ID parameter
//!   fails loudly instead of emitting `undefined` or `NaN` into the
//!   address bar
//! - Missing parameters are a normal omission, not an error; they are
//!   dropped from the query string with a diagnostic notice
//! - Parameters whose names contain `id` (or `Id`) are identifiers by
//!   convention and must coerce to a valid [`EntityId`]
//! - Output query strings follow standard `application/x-www-form-urlencoded`
//!   rules; consumers must not depend on parameter order
//!
//! ## Example
//!
//! ```
//! use eduscheme_links::create_safe_url;
//!
//! let url = create_safe_url("/admin/terms", [("form_grade_id", 5i64.into())]).unwrap();
//! assert_eq!(url, "/admin/terms?form_grade_id=5");
//!
//! assert!(create_safe_url("/admin/terms", [("form_grade_id", "abc".into())]).is_err());
//! ```

mod build;
mod error;
mod inspect;
mod query;
pub mod routes;

pub use build::{create_safe_url, is_id_param};
pub use error::LinkError;
pub use inspect::{inspect_url, ParamProblem, ParamReport, UrlReport};
pub use query::{id_query_param, parse_query, query_param};

pub use eduscheme_id::{Candidate, EntityId};
