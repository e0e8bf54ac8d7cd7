//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

use report_sync::cloud::gateway::{RemoteObject, StorageGateway};
use report_sync::config::SyncConfig;

type ObjectId = (String, String);

/// In-memory object store that records every call made against it.
#[derive(Default)]
pub struct InMemoryStorage {
    objects: Mutex<HashMap<ObjectId, DateTime<Utc>>>,
    broken_heads: Mutex<HashSet<ObjectId>>,
    failing_puts: Mutex<HashSet<ObjectId>>,
    heads: Mutex<Vec<ObjectId>>,
    puts: Mutex<Vec<(String, String, PathBuf)>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, last_modified: DateTime<Utc>) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), last_modified);
    }

    /// Make `head` fail with a non-"not found" error for this object
    pub fn break_head(&self, bucket: &str, key: &str) {
        self.broken_heads
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()));
    }

    /// Make every `put` of this object fail
    pub fn fail_puts(&self, bucket: &str, key: &str) {
        self.failing_puts
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()));
    }

    pub fn head_calls(&self) -> Vec<ObjectId> {
        self.heads.lock().unwrap().clone()
    }

    pub fn put_calls(&self) -> Vec<(String, String, PathBuf)> {
        self.puts.lock().unwrap().clone()
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&(bucket.to_string(), key.to_string()))
    }
}

#[async_trait::async_trait]
impl StorageGateway for InMemoryStorage {
    async fn head(&self, bucket: &str, key: &str) -> Result<Option<RemoteObject>> {
        let id = (bucket.to_string(), key.to_string());
        self.heads.lock().unwrap().push(id.clone());

        if self.broken_heads.lock().unwrap().contains(&id) {
            return Err(anyhow!("403 Forbidden"));
        }

        Ok(self
            .objects
            .lock()
            .unwrap()
            .get(&id)
            .map(|ts| RemoteObject { last_modified: *ts }))
    }

    async fn put(&self, bucket: &str, key: &str, path: &Path) -> Result<()> {
        let id = (bucket.to_string(), key.to_string());
        self.puts
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string(), path.to_path_buf()));

        if self.failing_puts.lock().unwrap().contains(&id) {
            return Err(anyhow!("connection reset by peer"));
        }

        fs::metadata(path)?;
        self.objects.lock().unwrap().insert(id, Utc::now());
        Ok(())
    }
}

/// Write a report file, creating parent directories
pub fn write_report(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"%PDF-1.4 report").unwrap();
    path
}

/// Backdate a file's modification time
pub fn backdate(path: &Path, age: Duration) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

/// Default agency buckets, rooted at `root`, with no retry delay
pub fn test_config(root: &Path) -> SyncConfig {
    SyncConfig {
        root_dir: root.to_path_buf(),
        retry_delay_secs: 0,
        log_file: None,
        ..SyncConfig::default()
    }
}
