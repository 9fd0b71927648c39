//! Immutable transition log.
//!
//! Tracks the transitions a transducer has taken, in order. The log is
//! immutable: `record` returns a new log with the entry appended.

use chrono::{DateTime, Utc};

/// Record of a single taken transition.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry<S, K> {
    /// Control state the transducer left
    pub from: S,
    /// Control state the transducer adopted
    pub to: S,
    /// Kind of the event that drove the transition
    pub event: K,
    /// When the step was processed
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of taken transitions.
///
/// Ignored events (no matching table entry) are not recorded; the log only
/// holds steps that actually resolved through the table.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionLog<S, K> {
    entries: Vec<LogEntry<S, K>>,
}

impl<S, K> Default for TransitionLog<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K> TransitionLog<S, K> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[LogEntry<S, K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sequence of control states visited: the first entry's source
    /// followed by every destination.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            path.push(&entry.to);
        }
        path
    }
}

impl<S: Clone, K: Clone> TransitionLog<S, K> {
    /// Return a new log with the entry appended. The original is untouched.
    pub fn record(&self, entry: LogEntry<S, K>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }
}
