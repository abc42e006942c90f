use super::RecordStore;
use super::types::{Field, LatestPolicy, Record, now_secs};
use crate::error::{Error, Result};

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

pub type Clock = Arc<dyn Fn() -> f64 + Send + Sync>;

/// In-memory record store.
///
/// Records live in a sharded `DashMap`. A merge-write holds the write guard of
/// the shard owning its UID for the whole read-modify-write, so two writes to
/// the same UID never interleave, while UIDs on other shards stay writable.
/// Readers take shard read guards and clone whole records, so they only ever
/// see fully applied writes.
pub struct MemoryStore {
    records: DashMap<String, Record>,
    policy: LatestPolicy,
    clock: Clock,
}

impl MemoryStore {
    pub fn new(policy: LatestPolicy) -> Self {
        Self::with_clock(policy, Arc::new(now_secs))
    }

    pub fn with_clock(policy: LatestPolicy, clock: Clock) -> Self {
        Self {
            records: DashMap::new(),
            policy,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_local(&self, uid: &str) -> Option<Record> {
        self.records.get(uid).map(|entry| entry.value().clone())
    }

    fn merge(&self, uid: &str, field: Field, value: f64) -> Record {
        let mut entry = self.records.entry(uid.to_string()).or_default();
        // Stamped under the guard so per-UID timestamps follow write order.
        let timestamp = (self.clock)();
        entry.apply(field, value, timestamp);
        entry.value().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(LatestPolicy::default())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn upsert_field(&self, uid: &str, field: Field, value: f64) -> Result<Record> {
        if uid.is_empty() {
            return Err(Error::invalid_field("uid"));
        }
        if !value.is_finite() {
            return Err(Error::invalid_field(field.as_str()));
        }

        let record = self.merge(uid, field, value);
        tracing::debug!("Merged {} for UID {}", field, uid);
        Ok(record)
    }

    async fn get_most_recent(&self) -> Result<Option<(String, Record)>> {
        let mut latest: Option<(String, Record)> = None;

        for entry in self.records.iter() {
            let candidate = (entry.key().as_str(), entry.value());
            let replace = match &latest {
                None => true,
                Some((uid, record)) => self
                    .policy
                    .compare(candidate, (uid.as_str(), record))
                    .is_gt(),
            };
            if replace {
                latest = Some((entry.key().clone(), entry.value().clone()));
            }
        }

        Ok(latest)
    }

    async fn get_all(&self) -> Result<BTreeMap<String, Record>> {
        Ok(self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }
}
