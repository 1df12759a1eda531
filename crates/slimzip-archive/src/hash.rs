//! Content hashing for archive entries.

use blake3::Hasher;

use slimzip_core::ContentHash;

/// Compute the BLAKE3 digest of one entry's raw bytes.
///
/// Pure function of the input: identical byte sequences always produce
/// identical digests.
pub fn digest(bytes: &[u8]) -> ContentHash {
    ContentHash::new(*blake3::hash(bytes).as_bytes())
}

/// Incremental hasher for streaming an entry without buffering it whole.
#[derive(Debug, Default)]
pub struct EntryHasher {
    inner: Hasher,
}

impl EntryHasher {
    /// Create a fresh hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of entry bytes.
    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Finish and produce the content hash.
    pub fn finalize(self) -> ContentHash {
        ContentHash::new(*self.inner.finalize().as_bytes())
    }
}
