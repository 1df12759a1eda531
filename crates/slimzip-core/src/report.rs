//! Analysis report types and size math.

use serde::{Deserialize, Serialize};

use crate::category::FileCategory;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Count and byte total for one removal reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalStats {
    /// Number of entries.
    pub count: u64,
    /// Total size of those entries in bytes.
    pub bytes: u64,
}

impl RemovalStats {
    /// Record one entry of the given size.
    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.bytes += size;
    }
}

/// Per-category slice of the kept entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// The category.
    pub category: FileCategory,
    /// Number of kept entries in this category.
    pub count: u64,
    /// Total size of kept entries in this category.
    pub bytes: u64,
}

/// Aggregate statistics for one pipeline run.
///
/// Immutable once built; safe to serialize and hand to unrelated
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of entries examined.
    pub total_files_analyzed: u64,
    /// Number of entries that did not survive.
    pub total_files_removed: u64,

    /// Total size of all entries in bytes.
    pub original_size_bytes: u64,
    /// Total size of surviving entries in bytes.
    pub cleaned_size_bytes: u64,
    /// Original size in MB.
    pub original_size_mb: f64,
    /// Cleaned size in MB.
    pub cleaned_size_mb: f64,
    /// Percent reduction, one decimal place; 0 for empty input.
    pub reduction_percentage: f64,

    /// Removed as byte-identical duplicates.
    pub duplicates: RemovalStats,
    /// Removed as stale.
    pub stale: RemovalStats,
    /// Removed as screenshot-like.
    pub screenshots: RemovalStats,
    /// Oversized entries across the whole archive. Informational: these
    /// overlap the other groups and are never a removal reason.
    pub oversized: RemovalStats,

    /// Kept entries grouped by category, largest first.
    pub categories: Vec<CategoryStats>,
}

impl AnalysisReport {
    /// Convert a byte count to MB.
    pub fn bytes_to_mb(bytes: u64) -> f64 {
        bytes as f64 / BYTES_PER_MB
    }

    /// Percent reduction from `original` to `cleaned`, rounded to one
    /// decimal place. Defined as 0 when `original` is 0.
    pub fn reduction(original: u64, cleaned: u64) -> f64 {
        if original == 0 {
            return 0.0;
        }
        let pct = (original.saturating_sub(cleaned)) as f64 / original as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}
