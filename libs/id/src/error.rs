//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID string contains non-digit characters.
    #[error("ID is not a base-10 integer: '{actual}'")]
    NotNumeric { actual: String },

    /// The ID string is numeric but not in canonical form (leading zeros
    /// or an explicit sign).
    #[error("ID is not in canonical form: '{actual}'")]
    NotCanonical { actual: String },

    /// The ID value is zero or negative.
    #[error("ID must be a positive integer, got {0}")]
    NotPositive(i64),

    /// The ID value does not fit in an `i64`.
    #[error("ID is out of range: '{actual}'")]
    OutOfRange { actual: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates the input was not numeric text.
    pub fn is_not_numeric(&self) -> bool {
        matches!(self, IdError::NotNumeric { .. })
    }
}
