//! Record Storage Module
//!
//! Owns every stored measurement. Handlers only ever reach state through the
//! [`RecordStore`] trait, which any backing technology can implement.
//!
//! ## Contract
//! - **Merge-writes**: `upsert_field` sets one field and the timestamp, leaving the
//!   sibling field untouched. Writes to the same UID are serialized.
//! - **Independence**: writes to different UIDs must not wait on each other.
//! - **Snapshots**: reads never see a record with half of a write applied.
//! - **Bounded time**: a call that cannot reach its backing store fails with
//!   `StoreUnavailable` instead of hanging. [`TimeoutStore`] adds this to any store.

pub mod memory;
pub mod timeout;
pub mod types;


pub use memory::MemoryStore;
pub use timeout::TimeoutStore;
pub use types::{Field, LatestPolicy, Record};

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Store handle shared by every request handler.
pub type SharedStore = Arc<dyn RecordStore>;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates the record for `uid` if needed, sets `field` to `value` and
    /// stamps the record, all as one step. Returns the merged record.
    async fn upsert_field(&self, uid: &str, field: Field, value: f64) -> Result<Record>;

    /// Returns the most recent record with its UID, or `None` when the store is empty.
    async fn get_most_recent(&self) -> Result<Option<(String, Record)>>;

    /// Returns a snapshot of every stored record.
    async fn get_all(&self) -> Result<BTreeMap<String, Record>>;
}
