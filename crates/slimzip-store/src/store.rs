//! Token-keyed ephemeral result storage.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

use slimzip_core::AnalysisReport;

use crate::config::StoreConfig;

/// Errors from store mutations.
///
/// Retrieval of an absent, expired, or already-consumed token is not an
/// error; it is reported through `Option`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A live record already exists under this token. Internal: the
    /// caller should mint a fresh token; the record is never overwritten.
    #[error("result token already present: {token}")]
    TokenCollision { token: String },
}

/// One stored pipeline result.
#[derive(Debug)]
struct StoreRecord {
    report: AnalysisReport,
    archive: Vec<u8>,
    created_at: Instant,
}

/// A result handed back by [`ResultStore::get`].
#[derive(Debug)]
pub struct RetrievedResult {
    /// The statistics report produced by the pipeline.
    pub report: AnalysisReport,
    /// The reduced archive bytes.
    pub archive: Vec<u8>,
}

/// Shared store of pipeline results with TTL expiry and destructive
/// single-use retrieval.
///
/// A token's lifecycle is absent → present → gone; both retrieval and
/// expiry are terminal, and the internal lock makes sure exactly one
/// removal path observes the record. Critical sections cover single key
/// operations only; archive bytes move by ownership and are never copied
/// under the lock.
#[derive(Debug)]
pub struct ResultStore {
    config: StoreConfig,
    records: Mutex<HashMap<String, StoreRecord>>,
}

impl ResultStore {
    /// Create a store with default config.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store with custom config.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// The configuration this store runs with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert a result under `token`, stamped with the current time.
    ///
    /// Fails with [`StoreError::TokenCollision`] if a live record already
    /// holds the token. A record past its TTL counts as absent and is
    /// replaced.
    pub fn put(
        &self,
        token: impl Into<String>,
        report: AnalysisReport,
        archive: Vec<u8>,
    ) -> Result<(), StoreError> {
        let token = token.into();
        let record = StoreRecord {
            report,
            archive,
            created_at: Instant::now(),
        };

        let mut records = self.lock();
        match records.entry(token) {
            Entry::Occupied(mut slot) => {
                if slot.get().created_at.elapsed() < self.config.ttl {
                    return Err(StoreError::TokenCollision {
                        token: slot.key().clone(),
                    });
                }
                slot.insert(record);
                Ok(())
            }
            Entry::Vacant(slot) => {
                debug!(token = slot.key().as_str(), "stored result");
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Destructively retrieve the result for `token`.
    ///
    /// Returns `None` for absent, expired, or already-retrieved tokens;
    /// an expired record is dropped on contact. A successful call removes
    /// the record, so a second call with the same token reports `None`
    /// even within the TTL window.
    pub fn get(&self, token: &str) -> Option<RetrievedResult> {
        let record = self.lock().remove(token)?;

        if record.created_at.elapsed() >= self.config.ttl {
            debug!(token, "token expired at retrieval");
            return None;
        }

        debug!(token, "retrieved result");
        Some(RetrievedResult {
            report: record.report,
            archive: record.archive,
        })
    }

    /// Evict every record past the TTL. Returns the number evicted.
    pub fn sweep_expired(&self) -> usize {
        let ttl = self.config.ttl;
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| record.created_at.elapsed() < ttl);
        before - records.len()
    }

    /// Number of records currently present, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, StoreRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimzip_core::RemovalStats;

    fn report() -> AnalysisReport {
        AnalysisReport {
            total_files_analyzed: 1,
            total_files_removed: 0,
            original_size_bytes: 10,
            cleaned_size_bytes: 10,
            original_size_mb: 0.0,
            cleaned_size_mb: 0.0,
            reduction_percentage: 0.0,
            duplicates: RemovalStats::default(),
            stale: RemovalStats::default(),
            screenshots: RemovalStats::default(),
            oversized: RemovalStats::default(),
            categories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get_moves_bytes_out() {
        let store = ResultStore::new();
        store.put("tok", report(), vec![1, 2, 3]).unwrap();

        let result = store.get("tok").unwrap();
        assert_eq!(result.archive, vec![1, 2, 3]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_collision_does_not_overwrite() {
        let store = ResultStore::new();
        store.put("tok", report(), vec![1]).unwrap();

        let err = store.put("tok", report(), vec![2]).unwrap_err();
        assert_eq!(
            err,
            StoreError::TokenCollision {
                token: "tok".to_string()
            }
        );

        // The original payload is intact.
        assert_eq!(store.get("tok").unwrap().archive, vec![1]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = ResultStore::new();
        assert!(store.get("nope").is_none());
    }
}
