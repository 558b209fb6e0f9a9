//! Bounded-view message log.
//!
//! [`MessageLog`] keeps every message ever appended, in insertion order, and
//! exposes a fixed-size tail for display. Appends and reads share one lock, so
//! concurrent producers never lose an entry and readers never see a half
//! finished append.
//!
//! ```rust
//! use progress_grid::messages::MessageLog;
//!
//! let log = MessageLog::new(2);
//! log.append("one");
//! log.append("two");
//! log.append("three");
//!
//! assert_eq!(log.visible_tail(), vec!["two", "three"]);
//! assert_eq!(log.all().len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Append-only list of status messages with a visible window.
#[derive(Debug)]
pub struct MessageLog {
    /// Every message appended so far.
    entries: Mutex<Vec<String>>,
    /// Number of trailing entries shown.
    window: usize,
}

impl MessageLog {
    /// Create an empty log showing at most `window` trailing entries.
    pub fn new(window: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            window,
        }
    }

    /// Size of the visible tail.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Append a message at the end of the log.
    pub fn append(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    /// The last `window` messages, oldest first.
    pub fn visible_tail(&self) -> Vec<String> {
        let entries = self.lock();
        let start = entries.len().saturating_sub(self.window);
        entries[start..].to_vec()
    }

    /// The full history, oldest first.
    pub fn all(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no message was appended yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking producer must not take the log down with it.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
