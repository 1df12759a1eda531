//! Keep/remove planning over classified entries.

use serde::Serialize;

use slimzip_core::{ClassifiedEntry, RemovalReason, RemovalStats};

/// Outcome of cleanup planning: an exact partition of the classified set.
///
/// Every input entry lands in exactly one of `keep` and `remove`, and the
/// per-reason byte totals are summed before any rounding happens.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupPlan {
    /// Entries surviving into the reduced archive, in archive order.
    pub keep: Vec<ClassifiedEntry>,
    /// Entries scheduled for removal, each attributed to one reason.
    pub remove: Vec<ClassifiedEntry>,

    /// Removed as duplicates.
    pub duplicates: RemovalStats,
    /// Removed as stale.
    pub stale: RemovalStats,
    /// Removed as screenshot-like.
    pub screenshots: RemovalStats,
    /// Oversized entries across the whole set; overlaps the other
    /// aggregates and removes nothing.
    pub oversized: RemovalStats,

    /// Total size of all entries in bytes.
    pub original_size: u64,
    /// Total size of kept entries in bytes.
    pub cleaned_size: u64,
}

impl CleanupPlan {
    /// Paths of the surviving entries, in archive order.
    pub fn keep_paths(&self) -> Vec<String> {
        self.keep.iter().map(|c| c.entry.path.clone()).collect()
    }

    /// Total number of entries that went into planning.
    pub fn total_entries(&self) -> usize {
        self.keep.len() + self.remove.len()
    }
}

/// Decides which classified entries survive and aggregates removal stats.
#[derive(Debug, Default)]
pub struct CleanupPlanner;

impl CleanupPlanner {
    /// Create a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Partition the classified entries into keep and remove sets.
    pub fn plan(&self, entries: Vec<ClassifiedEntry>) -> CleanupPlan {
        let mut plan = CleanupPlan::default();

        for classified in entries {
            let size = classified.entry.size;
            plan.original_size += size;

            if classified.flags.oversized {
                plan.oversized.record(size);
            }

            match classified.removal_reason {
                Some(RemovalReason::Duplicate) => {
                    plan.duplicates.record(size);
                    plan.remove.push(classified);
                }
                Some(RemovalReason::Stale) => {
                    plan.stale.record(size);
                    plan.remove.push(classified);
                }
                Some(RemovalReason::ScreenshotLike) => {
                    plan.screenshots.record(size);
                    plan.remove.push(classified);
                }
                None => {
                    plan.cleaned_size += size;
                    plan.keep.push(classified);
                }
            }
        }

        plan
    }
}
