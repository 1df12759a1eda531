//! Core types for slimzip.
//!
//! This crate provides the fundamental data structures shared across the
//! slimzip workspace: archive entries, content hashes, classification
//! flags, file-type categories, the analysis report, configuration, and
//! the pipeline error taxonomy.

mod category;
mod config;
mod entry;
mod error;
mod report;

pub use category::FileCategory;
pub use config::{CleanupConfig, CleanupConfigBuilder};
pub use entry::{ArchiveEntry, ClassifiedEntry, ContentHash, EntryFlags, RemovalReason};
pub use error::ArchiveError;
pub use report::{AnalysisReport, CategoryStats, RemovalStats};
