//! # eduscheme-id
//!
//! Identifier candidates, validation, and typed entity IDs for EduScheme.
//!
//! ## Design Principles
//!
//! - Entity identifiers are backend-assigned positive integers; anything
//!   else (zero, negatives, fractions, non-numeric text) is invalid
//! - Values arriving from URLs and form fields are always textual, so
//!   validation comes in two flavors: a strict predicate for values that
//!   are already numeric, and a coercing conversion for textual input
//! - Invalidity is a normal outcome, not an error: the predicate returns
//!   `bool`, the coercion returns `Option`, and neither ever panics
//! - IDs are typed per resource so a term ID cannot be passed where a
//!   subject ID is expected
//!
//! ## Validation asymmetry
//!
//! [`Candidate::is_valid_id`] rejects numeric strings while
//! [`Candidate::to_valid_id`] accepts them. This is intentional: the
//! strict check guards values that should already be typed numbers, and
//! coercion happens only at textual input boundaries (route segments,
//! query strings, form fields).

mod candidate;
mod error;
mod macros;
mod types;

pub use candidate::Candidate;
pub use error::IdError;
pub use types::*;
