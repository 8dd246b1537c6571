//! # eduscheme-errors
//!
//! Error normalization, retry, and bounded-volume logging for EduScheme.
//!
//! ## Design Principles
//!
//! - Anything shown to a user passes through normalization first: never a
//!   raw payload dump, never `[object Object]`, never an empty string
//! - Unknown error shapes are decoded against the known API error schemas
//!   in a fixed priority order, with a catch-all at the end; normalization
//!   itself can never fail
//! - Object-shaped API errors (`detail`, `error`, status codes) are far
//!   more common than bare strings here, so they are matched before
//!   falling back to serialization
//! - Log volume is a soft guarantee: repeated identical messages are
//!   capped per rolling window, and the counters live in an explicit
//!   value owned by the composition root, not a module-level singleton
//!
//! ## Example
//!
//! ```
//! use eduscheme_errors::safe_error_message;
//! use serde_json::json;
//!
//! assert_eq!(safe_error_message(&json!({"detail": "Term not found"})), "Term not found");
//! assert_eq!(safe_error_message(&json!(null)), "An unknown error occurred");
//! ```

mod app;
mod debounce;
mod http;
mod message;
mod retry;
mod shape;

pub use app::{create_app_error, AppError, UNKNOWN_ERROR_CODE};
pub use debounce::{
    DebouncedLogger, ErrorDebouncer, DEFAULT_DEBOUNCE_WINDOW, DEFAULT_MAX_LOGS_PER_WINDOW,
};
pub use http::http_error_message;
pub use message::{log_error, safe_display_message, safe_error_message, FALLBACK_MESSAGE};
pub use retry::retry_operation;
pub use shape::{classify, ErrorShape};
