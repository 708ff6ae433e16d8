//! Summarizing a merge outcome for display.

use crate::reconcile::MergeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts describing a sync outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Quotes newly added from the remote
    pub added: usize,
    /// Local quotes replaced by the remote version
    pub updated: usize,
    /// Conflicts detected during the merge
    pub conflicts: usize,
}

impl SyncSummary {
    /// Whether the merge changed anything at all.
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.updated == 0
    }
}

/// Summarize a merge result. Pure function; no side effects.
pub fn summarize(result: &MergeResult) -> SyncSummary {
    SyncSummary {
        added: result.added.len(),
        // Remote-wins resolution turns every conflict into an update.
        updated: result.conflicts.len(),
        conflicts: result.conflicts.len(),
    }
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} updated, {} conflict{}",
            self.added,
            self.updated,
            self.conflicts,
            if self.conflicts == 1 { "" } else { "s" }
        )
    }
}
