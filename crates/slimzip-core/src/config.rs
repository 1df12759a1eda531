//! Cleanup pipeline configuration.

use std::time::{Duration, SystemTime};

use derive_builder::Builder;

/// Configuration for classification and archive rewriting.
///
/// Every threshold carries a documented default and can be overridden
/// through the builder without code changes.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CleanupConfig {
    /// Entries last modified longer ago than this are stale.
    #[builder(default = "Duration::from_secs(2 * 365 * 24 * 60 * 60)")] // ~2 years
    pub stale_threshold: Duration,

    /// Entries larger than this are flagged oversized (informational).
    #[builder(default = "50 * 1024 * 1024")] // 50 MiB
    pub large_file_threshold: u64,

    /// Case-insensitive base-name substrings connoting screen captures.
    #[builder(default = "Self::default_substrings()")]
    pub screenshot_substrings: Vec<String>,

    /// Stem prefixes that, followed by digits, connote captures.
    #[builder(default = "Self::default_prefixes()")]
    pub screenshot_prefixes: Vec<String>,

    /// Deflate level for the rewritten archive (0-9).
    #[builder(default = "6")]
    pub compression_level: u32,

    /// Reference time for staleness (default: now).
    #[builder(default = "SystemTime::now()")]
    pub reference_time: SystemTime,
}

impl CleanupConfigBuilder {
    fn default_substrings() -> Vec<String> {
        vec!["screenshot".to_string(), "screen shot".to_string()]
    }

    fn default_prefixes() -> Vec<String> {
        vec!["img_".to_string(), "image_".to_string(), "photo_".to_string()]
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(level) = self.compression_level {
            if level > 9 {
                return Err(format!("compression level {level} out of range (0-9)"));
            }
        }
        Ok(())
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            stale_threshold: Duration::from_secs(2 * 365 * 24 * 60 * 60),
            large_file_threshold: 50 * 1024 * 1024,
            screenshot_substrings: CleanupConfigBuilder::default_substrings(),
            screenshot_prefixes: CleanupConfigBuilder::default_prefixes(),
            compression_level: 6,
            reference_time: SystemTime::now(),
        }
    }
}

impl CleanupConfig {
    /// Create a new config builder.
    pub fn builder() -> CleanupConfigBuilder {
        CleanupConfigBuilder::default()
    }
}
