//! Error types for safe URL construction.

use thiserror::Error;

/// Errors that can occur when building a navigation URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// A parameter named like an identifier failed validation.
    ///
    /// Fatal to the whole build: callers should render an error state
    /// rather than navigate with a broken link.
    #[error("invalid identifier parameter '{name}': '{value}' (must be a positive integer)")]
    InvalidIdParam { name: String, value: String },
}

impl LinkError {
    /// The name of the offending parameter.
    pub fn param_name(&self) -> &str {
        match self {
            LinkError::InvalidIdParam { name, .. } => name,
        }
    }
}
