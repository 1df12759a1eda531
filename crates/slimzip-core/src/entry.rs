//! Archive entry types and classification flags.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::category::FileCategory;

/// BLAKE3 content hash for exact duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// One file record inside a submitted archive.
///
/// Created during the single decode pass and never mutated afterwards.
/// Directory records are excluded at decode time; a path appearing twice
/// in one archive is a malformed-input condition, not a content duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Archive-relative path, unique within one archive.
    pub path: String,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Modification time recorded in the archive's own metadata.
    ///
    /// `None` when the archive carries no usable timestamp; such entries
    /// are never considered stale.
    pub modified: Option<SystemTime>,

    /// Content hash of the raw entry bytes, computed once during decode.
    pub hash: ContentHash,
}

impl ArchiveEntry {
    /// The final path component.
    pub fn base_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// The file extension, if any, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.base_name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

/// Classification flags, each computed independently.
///
/// The flags are not mutually exclusive; removal attribution applies its
/// own priority order on top of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFlags {
    /// A byte-identical copy of an earlier entry.
    pub duplicate: bool,
    /// Older than the configured stale threshold.
    pub stale: bool,
    /// Base name matches a screen-capture naming heuristic.
    pub screenshot_like: bool,
    /// Exceeds the large-file threshold. Informational only; never
    /// justifies removal by itself.
    pub oversized: bool,
}

/// The single reason an entry is attributed to when removed.
///
/// There is deliberately no `Oversized` variant: large files are flagged
/// for review, not removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Later copy of byte-identical content.
    Duplicate,
    /// Past the stale-age threshold.
    Stale,
    /// Screen-capture naming heuristic matched.
    ScreenshotLike,
}

/// An entry together with its classification outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// The decoded entry.
    pub entry: ArchiveEntry,
    /// All independently computed flags.
    pub flags: EntryFlags,
    /// File-type category from the path's extension.
    pub category: FileCategory,
    /// First matching removal rule, or `None` for kept entries.
    pub removal_reason: Option<RemovalReason>,
}

impl ClassifiedEntry {
    /// Whether this entry survives into the reduced archive.
    pub fn is_kept(&self) -> bool {
        self.removal_reason.is_none()
    }
}
