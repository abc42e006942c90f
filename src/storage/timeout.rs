use super::RecordStore;
use super::types::{Field, Record};
use crate::error::{Error, Result};

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

/// Bounds every call on the wrapped store.
///
/// A call that does not finish within `timeout` is dropped and reported as
/// `StoreUnavailable`, so a stalled backend never holds a request open.
pub struct TimeoutStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: RecordStore> TimeoutStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(&self, operation: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    "Store operation {} timed out after {}ms",
                    operation,
                    self.timeout.as_millis()
                );
                Err(Error::store_unavailable(format!(
                    "{} timed out after {}ms",
                    operation,
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

#[async_trait]
impl<S: RecordStore> RecordStore for TimeoutStore<S> {
    async fn upsert_field(&self, uid: &str, field: Field, value: f64) -> Result<Record> {
        self.bounded("upsert_field", self.inner.upsert_field(uid, field, value))
            .await
    }

    async fn get_most_recent(&self) -> Result<Option<(String, Record)>> {
        self.bounded("get_most_recent", self.inner.get_most_recent())
            .await
    }

    async fn get_all(&self) -> Result<BTreeMap<String, Record>> {
        self.bounded("get_all", self.inner.get_all()).await
    }
}
