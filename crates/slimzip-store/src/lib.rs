//! Ephemeral result storage for slimzip.
//!
//! Holds completed pipeline results behind opaque tokens with two removal
//! paths, whichever fires first:
//!
//! - **Retrieval** - [`ResultStore::get`] is destructive and single-use;
//!   a token is never reusable after a successful retrieval.
//! - **Expiry** - a background [`Sweeper`](spawn_sweeper) evicts records
//!   past the TTL, bounding storage for tokens that are never retrieved.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use slimzip_store::{ResultStore, mint_token, spawn_sweeper};
//!
//! let store = Arc::new(ResultStore::new());
//! let sweeper = spawn_sweeper(store.clone());
//!
//! let token = mint_token();
//! store.put(&token, report, archive_bytes)?;
//!
//! // Later, exactly once:
//! if let Some(result) = store.get(&token) {
//!     // stream result.archive back to the requester
//! }
//!
//! sweeper.shutdown().await;
//! ```

mod config;
mod store;
mod sweep;
mod token;

pub use config::{StoreConfig, StoreConfigBuilder};
pub use store::{ResultStore, RetrievedResult, StoreError};
pub use sweep::{SweepHandle, spawn_sweeper};
pub use token::mint_token;
