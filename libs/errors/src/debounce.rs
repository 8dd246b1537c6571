//! Bounded-volume error logging.
//!
//! Repeated identical error messages (a failing poll loop, a dead
//! backend) can flood the log. The debouncer caps emissions per distinct
//! message within a rolling window; the cap is a soft guarantee, not a
//! correctness property.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::error;

use crate::message::safe_error_message;

/// Default cap on emissions per message per window.
pub const DEFAULT_MAX_LOGS_PER_WINDOW: u32 = 5;

/// Default debounce window.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_secs(60);

/// Per-message emission counter with a rolling window.
///
/// An explicit value, not a singleton: the composition root owns one and
/// passes it where needed, so tests can construct isolated instances.
#[derive(Debug)]
pub struct ErrorDebouncer {
    max_per_window: u32,
    window: Duration,

    /// Tracked messages: message -> (emissions, window start).
    seen: BTreeMap<String, (u32, Instant)>,
}

impl ErrorDebouncer {
    /// Creates a debouncer with an explicit cap and window.
    #[must_use]
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            seen: BTreeMap::new(),
        }
    }

    /// Decides whether an emission of `message` is within the cap,
    /// counting it if so.
    ///
    /// A message's window starts at its first emission and resets once
    /// the window has fully elapsed.
    pub fn should_log(&mut self, message: &str) -> bool {
        let now = Instant::now();

        match self.seen.get_mut(message) {
            Some((count, start)) => {
                if now.duration_since(*start) > self.window {
                    *count = 1;
                    *start = now;
                    return true;
                }
                if *count < self.max_per_window {
                    *count += 1;
                    return true;
                }
                false
            }
            None => {
                if self.max_per_window == 0 {
                    return false;
                }
                self.seen.insert(message.to_string(), (1, now));
                true
            }
        }
    }

    /// Evicts entries whose window has elapsed.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.seen
            .retain(|_, (_, start)| now.duration_since(*start) <= self.window);
    }

    /// Number of currently tracked messages.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.seen.len()
    }
}

impl Default for ErrorDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOGS_PER_WINDOW, DEFAULT_DEBOUNCE_WINDOW)
    }
}

/// A thread-safe logging facade over [`ErrorDebouncer`].
///
/// The counters are behind a `Mutex` so concurrent emitters cannot race
/// the cap.
#[derive(Debug, Default)]
pub struct DebouncedLogger {
    inner: Mutex<ErrorDebouncer>,
}

impl DebouncedLogger {
    /// Wraps a debouncer for shared use.
    #[must_use]
    pub fn new(debouncer: ErrorDebouncer) -> Self {
        Self {
            inner: Mutex::new(debouncer),
        }
    }

    /// Normalizes and logs an error payload, unless the message is over
    /// its cap for the current window.
    ///
    /// Returns true if the message was emitted.
    pub fn log(&self, value: &Value, context: Option<&str>) -> bool {
        let message = safe_error_message(value);
        let allowed = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .should_log(&message);

        if allowed {
            match context {
                Some(context) => error!(context = context, "{message}"),
                None => error!("{message}"),
            }
        }
        allowed
    }
}
