//! Report assembly from planner output.

use std::collections::HashMap;

use slimzip_core::{AnalysisReport, CategoryStats, FileCategory};

use crate::plan::CleanupPlan;

/// Assemble the final statistics structure from a cleanup plan.
///
/// Pure aggregation: byte totals come from the plan unchanged, MB figures
/// and the reduction percentage are derived at the end, and the category
/// breakdown covers kept entries only.
pub fn build_report(plan: &CleanupPlan) -> AnalysisReport {
    let mut by_category: HashMap<FileCategory, CategoryStats> = HashMap::new();
    for classified in &plan.keep {
        let stats = by_category
            .entry(classified.category)
            .or_insert(CategoryStats {
                category: classified.category,
                count: 0,
                bytes: 0,
            });
        stats.count += 1;
        stats.bytes += classified.entry.size;
    }

    let mut categories: Vec<CategoryStats> = by_category.into_values().collect();
    categories.sort_by(|a, b| {
        b.bytes
            .cmp(&a.bytes)
            .then_with(|| a.category.to_string().cmp(&b.category.to_string()))
    });

    AnalysisReport {
        total_files_analyzed: plan.total_entries() as u64,
        total_files_removed: plan.remove.len() as u64,
        original_size_bytes: plan.original_size,
        cleaned_size_bytes: plan.cleaned_size,
        original_size_mb: AnalysisReport::bytes_to_mb(plan.original_size),
        cleaned_size_mb: AnalysisReport::bytes_to_mb(plan.cleaned_size),
        reduction_percentage: AnalysisReport::reduction(plan.original_size, plan.cleaned_size),
        duplicates: plan.duplicates,
        stale: plan.stale,
        screenshots: plan.screenshots,
        oversized: plan.oversized,
        categories,
    }
}
