//! Identity assignment for person records.
//!
//! An explicit service object rather than a process-wide singleton: whoever
//! constructs records decides the assigner's scope (one per run, one per
//! batch). Ids are strictly increasing and never reused for the lifetime of
//! the assigner, even if the record that received one is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, strictly increasing ids.
#[derive(Debug, Default)]
pub struct IdAssigner {
    next: AtomicU64,
}

impl IdAssigner {
    /// An assigner whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// An assigner whose first id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Returns the next id. Atomic, so the uniqueness invariant holds even
    /// if the assigner is shared across threads.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
