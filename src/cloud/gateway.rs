use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};

/// Metadata for an object that exists in remote storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteObject {
    pub last_modified: DateTime<Utc>,
}

/// Remote object storage as seen by the sync pass.
///
/// `head` returns `Ok(None)` when the object does not exist; every other
/// failure is an `Err`. `put` overwrites any existing object under `key`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StorageGateway: Send + Sync {
    async fn head(&self, bucket: &str, key: &str) -> Result<Option<RemoteObject>>;
    async fn put(&self, bucket: &str, key: &str, path: &Path) -> Result<()>;
}

/// Lets a caller keep a handle on a gateway it passes into a `Synchronizer`
#[async_trait::async_trait]
impl<T: StorageGateway + ?Sized> StorageGateway for Arc<T> {
    async fn head(&self, bucket: &str, key: &str) -> Result<Option<RemoteObject>> {
        (**self).head(bucket, key).await
    }

    async fn put(&self, bucket: &str, key: &str, path: &Path) -> Result<()> {
        (**self).put(bucket, key, path).await
    }
}
