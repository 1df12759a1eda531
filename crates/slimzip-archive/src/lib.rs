//! Archive decoding and rewriting for slimzip.
//!
//! This crate owns the two ends of the pipeline's archive I/O:
//!
//! - **Decoding** - a single pass over a zip archive that yields one
//!   [`ArchiveEntry`](slimzip_core::ArchiveEntry) per file record, hashing
//!   each entry's bytes as they stream by.
//! - **Rewriting** - emitting a new archive that holds exactly the
//!   surviving paths with their original bytes, at a fixed compression
//!   level.
//!
//! Both ends fail the whole operation on malformed input; partial output
//! is never produced.
//!
//! ```rust,ignore
//! use slimzip_archive::{read_entries, ArchiveRewriter};
//!
//! let entries = read_entries(&archive_bytes)?;
//! let keep: Vec<String> = entries.iter().map(|e| e.path.clone()).collect();
//!
//! let rewriter = ArchiveRewriter::new(6);
//! let reduced = rewriter.rewrite(&archive_bytes, &keep)?;
//! ```

mod hash;
mod reader;
mod writer;

pub use hash::{EntryHasher, digest};
pub use reader::read_entries;
pub use writer::ArchiveRewriter;
