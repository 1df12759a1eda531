//! Entry classification.
//!
//! Each predicate is computed independently over entry metadata; removal
//! attribution then applies one fixed priority order, so every removed
//! entry lands in exactly one statistics bucket.

use indexmap::IndexMap;

use slimzip_core::{
    ArchiveEntry, CleanupConfig, ClassifiedEntry, ContentHash, EntryFlags, FileCategory,
    RemovalReason,
};

/// Hash → paths sharing that hash, in archive iteration order.
///
/// The first path of a multi-path group is the original; every later
/// path is a duplicate. Built append-only during one linear pass, so the
/// "first seen wins" choice is reproducible run to run.
#[derive(Debug, Default)]
pub struct HashIndex {
    groups: IndexMap<ContentHash, Vec<String>>,
}

impl HashIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from entries in archive iteration order.
    pub fn from_entries(entries: &[ArchiveEntry]) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Record one entry. Must be called in archive iteration order.
    pub fn insert(&mut self, entry: &ArchiveEntry) {
        self.groups
            .entry(entry.hash)
            .or_default()
            .push(entry.path.clone());
    }

    /// Whether `entry` is a later copy of an earlier identical entry.
    pub fn is_duplicate(&self, entry: &ArchiveEntry) -> bool {
        match self.groups.get(&entry.hash) {
            Some(paths) => paths.first().is_some_and(|first| first != &entry.path),
            None => false,
        }
    }

    /// All paths recorded for a hash, in insertion order.
    pub fn group(&self, hash: &ContentHash) -> Option<&[String]> {
        self.groups.get(hash).map(Vec::as_slice)
    }
}

/// Ordered removal-attribution rules; the first matching rule wins.
///
/// Oversized is deliberately absent: large files are reported, never
/// removed on size alone.
const REMOVAL_RULES: [(fn(EntryFlags) -> bool, RemovalReason); 3] = [
    (|f| f.duplicate, RemovalReason::Duplicate),
    (|f| f.stale, RemovalReason::Stale),
    (|f| f.screenshot_like, RemovalReason::ScreenshotLike),
];

/// Pick the removal reason an entry is attributed to, if any.
pub fn removal_reason(flags: EntryFlags) -> Option<RemovalReason> {
    REMOVAL_RULES
        .iter()
        .find(|(matches, _)| matches(flags))
        .map(|&(_, reason)| reason)
}

/// Applies the classification predicates to decoded entries.
pub struct Classifier {
    config: CleanupConfig,
}

impl Classifier {
    /// Create a classifier with default config.
    pub fn new() -> Self {
        Self {
            config: CleanupConfig::default(),
        }
    }

    /// Create a classifier with custom config.
    pub fn with_config(config: CleanupConfig) -> Self {
        Self { config }
    }

    /// Classify every entry against the duplicate index.
    pub fn classify(&self, entries: &[ArchiveEntry], index: &HashIndex) -> Vec<ClassifiedEntry> {
        entries
            .iter()
            .map(|entry| self.classify_entry(entry, index))
            .collect()
    }

    fn classify_entry(&self, entry: &ArchiveEntry, index: &HashIndex) -> ClassifiedEntry {
        let flags = EntryFlags {
            duplicate: index.is_duplicate(entry),
            stale: self.is_stale(entry),
            screenshot_like: self.is_screenshot_like(entry.base_name()),
            oversized: entry.size > self.config.large_file_threshold,
        };

        ClassifiedEntry {
            category: FileCategory::from_extension(entry.extension()),
            removal_reason: removal_reason(flags),
            flags,
            entry: entry.clone(),
        }
    }

    /// Entries with no recorded modification time are never stale.
    fn is_stale(&self, entry: &ArchiveEntry) -> bool {
        let Some(modified) = entry.modified else {
            return false;
        };
        self.config
            .reference_time
            .duration_since(modified)
            .is_ok_and(|age| age > self.config.stale_threshold)
    }

    /// Heuristic base-name match; false positives are acceptable.
    fn is_screenshot_like(&self, base_name: &str) -> bool {
        let name = base_name.to_lowercase();
        if self
            .config
            .screenshot_substrings
            .iter()
            .any(|s| name.contains(&s.to_lowercase()))
        {
            return true;
        }

        let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(&name);
        self.config.screenshot_prefixes.iter().any(|prefix| {
            stem.strip_prefix(&prefix.to_lowercase())
                .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
