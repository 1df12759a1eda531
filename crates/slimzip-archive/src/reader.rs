//! One-pass archive decoding.

use std::collections::HashSet;
use std::io::{Cursor, Read};
use std::time::{Duration, SystemTime};

use chrono::{TimeZone, Utc};
use tracing::debug;
use zip::ZipArchive;

use slimzip_core::{ArchiveEntry, ArchiveError};

use crate::hash::EntryHasher;

const READ_CHUNK: usize = 64 * 1024;

/// Decode all file entries from raw archive bytes in one pass.
///
/// Entries come back in archive iteration order. That order decides which
/// member of a duplicate group counts as the original, so callers must not
/// reorder entries before classification. Directory records are skipped;
/// a repeated path or an unreadable entry fails the whole decode. An
/// empty archive is valid and yields an empty list.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ArchiveError::corrupt(e.to_string()))?;

    let mut entries = Vec::with_capacity(archive.len());
    let mut seen_paths: HashSet<String> = HashSet::new();

    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| ArchiveError::corrupt(e.to_string()))?;
        if file.is_dir() {
            continue;
        }

        let path = file.name().to_string();
        if !seen_paths.insert(path.clone()) {
            return Err(ArchiveError::DuplicatePath { path });
        }

        let size = file.size();
        let modified = recorded_mtime(file.last_modified());

        let mut hasher = EntryHasher::new();
        let mut buf = vec![0u8; READ_CHUNK];
        loop {
            let n = file
                .read(&mut buf)
                .map_err(|source| ArchiveError::unreadable(path.clone(), source))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }

        entries.push(ArchiveEntry {
            path,
            size,
            modified,
            hash: hasher.finalize(),
        });
    }

    debug!(entries = entries.len(), "decoded archive");
    Ok(entries)
}

/// Convert a zip-recorded MS-DOS timestamp to `SystemTime`.
///
/// The zip format has no "absent" marker; the format's default stamp
/// (1980-01-01 00:00:00) is what writers emit when they have no real
/// timestamp, so it maps to `None` along with anything unrepresentable.
fn recorded_mtime(dt: Option<zip::DateTime>) -> Option<SystemTime> {
    let dt = dt?;
    if is_dos_epoch(&dt) {
        return None;
    }
    let utc = Utc
        .with_ymd_and_hms(
            i32::from(dt.year()),
            u32::from(dt.month()),
            u32::from(dt.day()),
            u32::from(dt.hour()),
            u32::from(dt.minute()),
            u32::from(dt.second()),
        )
        .single()?;
    let secs = u64::try_from(utc.timestamp()).ok()?;
    Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

fn is_dos_epoch(dt: &zip::DateTime) -> bool {
    dt.year() == 1980
        && dt.month() == 1
        && dt.day() == 1
        && dt.hour() == 0
        && dt.minute() == 0
        && dt.second() == 0
}
