//! Reduced-archive rewriting.

use std::collections::HashSet;
use std::io::{Cursor, Read, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use slimzip_core::ArchiveError;

/// Rewrites an archive down to a surviving subset of its entries.
///
/// Paths and raw bytes are preserved; entries are recompressed with a
/// fixed Deflate level so identical input always yields identical output.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveRewriter {
    compression_level: u32,
}

impl ArchiveRewriter {
    /// Create a rewriter with the given Deflate level (0-9).
    pub fn new(compression_level: u32) -> Self {
        Self { compression_level }
    }

    /// Produce a new archive holding exactly the `keep` paths.
    ///
    /// Entries outside `keep` never reach the output. If any `keep` path
    /// cannot be re-read from `original`, the whole rewrite fails and no
    /// archive is returned.
    pub fn rewrite(&self, original: &[u8], keep: &[String]) -> Result<Vec<u8>, ArchiveError> {
        let keep_set: HashSet<&str> = keep.iter().map(String::as_str).collect();

        let mut archive = ZipArchive::new(Cursor::new(original))
            .map_err(|e| ArchiveError::corrupt(e.to_string()))?;
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        let mut written: HashSet<String> = HashSet::new();

        for index in 0..archive.len() {
            let mut file = archive
                .by_index(index)
                .map_err(|e| ArchiveError::corrupt(e.to_string()))?;
            if file.is_dir() || !keep_set.contains(file.name()) {
                continue;
            }

            let path = file.name().to_string();
            // Pin the timestamp: carry the original's stamp, or the format
            // default when absent, so identical input yields identical output.
            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(self.compression_level)))
                .last_modified_time(file.last_modified().unwrap_or_default());

            writer
                .start_file(path.as_str(), options)
                .map_err(|e| ArchiveError::corrupt(e.to_string()))?;

            let mut bytes = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut bytes)
                .map_err(|source| ArchiveError::unreadable(path.clone(), source))?;
            writer.write_all(&bytes)?;

            written.insert(path);
        }

        if written.len() != keep_set.len() {
            let missing = keep
                .iter()
                .find(|p| !written.contains(*p))
                .cloned()
                .unwrap_or_default();
            return Err(ArchiveError::MissingEntry { path: missing });
        }

        let cursor = writer
            .finish()
            .map_err(|e| ArchiveError::corrupt(e.to_string()))?;
        debug!(kept = written.len(), "rewrote archive");
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keep_set_yields_empty_archive() {
        // Build a one-entry archive, then keep nothing.
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("a.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"contents").unwrap();
        let original = writer.finish().unwrap().into_inner();

        let rewriter = ArchiveRewriter::new(6);
        let reduced = rewriter.rewrite(&original, &[]).unwrap();

        let archive = ZipArchive::new(Cursor::new(reduced.as_slice())).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_missing_keep_path_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("a.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"contents").unwrap();
        let original = writer.finish().unwrap().into_inner();

        let rewriter = ArchiveRewriter::new(6);
        let result = rewriter.rewrite(&original, &["ghost.txt".to_string()]);
        assert!(
            matches!(result, Err(ArchiveError::MissingEntry { path }) if path == "ghost.txt")
        );
    }
}
