//! End-to-end analysis and cleanup pipeline.
//!
//! One invocation runs decode → hash/classify → plan → rewrite → report,
//! synchronously and without internal concurrency. Invocations share no
//! mutable state, so independent archives can run in parallel freely.

use tracing::{debug, info};

use slimzip_archive::{ArchiveRewriter, read_entries};
use slimzip_core::{AnalysisReport, ArchiveError, CleanupConfig};

use crate::classify::{Classifier, HashIndex};
use crate::plan::CleanupPlanner;
use crate::report::build_report;

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Aggregate statistics for the run.
    pub report: AnalysisReport,
    /// The reduced archive bytes.
    pub archive: Vec<u8>,
    /// Paths that survived, in archive order.
    pub kept_paths: Vec<String>,
}

/// The archive analysis and cleanup pipeline.
pub struct ArchivePipeline {
    config: CleanupConfig,
}

impl ArchivePipeline {
    /// Create a pipeline with default config.
    pub fn new() -> Self {
        Self {
            config: CleanupConfig::default(),
        }
    }

    /// Create a pipeline with custom config.
    pub fn with_config(config: CleanupConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over raw archive bytes.
    ///
    /// Any malformed-input error aborts the whole run; no partial report
    /// or partial archive is returned. An empty archive is valid and
    /// produces a report with zero percentages.
    pub fn run(&self, archive: &[u8]) -> Result<PipelineOutput, ArchiveError> {
        let entries = read_entries(archive)?;

        let index = HashIndex::from_entries(&entries);
        let classifier = Classifier::with_config(self.config.clone());
        let classified = classifier.classify(&entries, &index);
        debug!(entries = classified.len(), "classified entries");

        let plan = CleanupPlanner::new().plan(classified);
        let kept_paths = plan.keep_paths();

        let rewriter = ArchiveRewriter::new(self.config.compression_level);
        let reduced = rewriter.rewrite(archive, &kept_paths)?;

        let report = build_report(&plan);
        info!(
            analyzed = report.total_files_analyzed,
            removed = report.total_files_removed,
            reduction = report.reduction_percentage,
            "pipeline complete"
        );

        Ok(PipelineOutput {
            report,
            archive: reduced,
            kept_paths,
        })
    }
}

impl Default for ArchivePipeline {
    fn default() -> Self {
        Self::new()
    }
}
