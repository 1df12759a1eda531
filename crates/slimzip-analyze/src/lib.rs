//! Analysis and cleanup for slimzip.
//!
//! This crate turns decoded archive entries into a cleanup decision and a
//! statistics report:
//!
//! - **Classification** - independent predicates (duplicate, stale,
//!   screenshot-like, oversized) plus a file-type category per entry
//! - **Planning** - an exact keep/remove partition with per-reason
//!   aggregates
//! - **Reporting** - the final statistics structure handed to callers
//! - **Pipeline** - the one-call orchestration over raw archive bytes
//!
//! # Pipeline
//!
//! ```rust,ignore
//! use slimzip_analyze::ArchivePipeline;
//!
//! let pipeline = ArchivePipeline::new();
//! let output = pipeline.run(&archive_bytes)?;
//!
//! println!("removed {} of {} entries",
//!     output.report.total_files_removed,
//!     output.report.total_files_analyzed);
//! ```
//!
//! Removal attribution follows a fixed priority: a duplicate is removed
//! as a duplicate even when it is also stale or screenshot-like, and an
//! oversized entry is never removed on size alone.

mod classify;
mod pipeline;
mod plan;
mod report;

pub use classify::{Classifier, HashIndex, removal_reason};
pub use pipeline::{ArchivePipeline, PipelineOutput};
pub use plan::{CleanupPlan, CleanupPlanner};
pub use report::build_report;

// Re-export core types
pub use slimzip_core::{AnalysisReport, ArchiveEntry, CleanupConfig, ClassifiedEntry};
