use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::bucket_map::BucketMap;
use crate::constants::{
    DEFAULT_BUCKETS, DEFAULT_ENVIRONMENT, DEFAULT_LOG_FILE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RECENCY_DAYS, DEFAULT_RETRY_DELAY_SECS, DEFAULT_UNIX_ROOT, DEFAULT_WINDOWS_ROOT,
    SECONDS_PER_DAY,
};
use crate::sync::retry::RetryPolicy;

/// Settings for one synchronization pass.
///
/// Missing YAML fields fall back to the built-in defaults, so a config file
/// only needs to name what it changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SyncConfig {
    pub root_dir: PathBuf,
    pub environment: String,
    pub buckets: BTreeMap<String, String>,
    pub recency_days: u64,
    pub max_attempts: usize,
    pub retry_delay_secs: u64,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            root_dir: default_root_dir(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            buckets: DEFAULT_BUCKETS
                .iter()
                .map(|(agency, bucket)| (agency.to_string(), bucket.to_string()))
                .collect(),
            recency_days: DEFAULT_RECENCY_DAYS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
            region: None,
            profile: None,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

fn default_root_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(DEFAULT_WINDOWS_ROOT)
    } else {
        PathBuf::from(DEFAULT_UNIX_ROOT)
    }
}

impl SyncConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: SyncConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml).context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Reject settings the sync pass cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(anyhow!("max_attempts must be at least 1"));
        }
        if self.buckets.values().any(|bucket| bucket.trim().is_empty()) {
            return Err(anyhow!("bucket names must not be empty"));
        }
        Ok(())
    }

    pub fn bucket_map(&self) -> BucketMap {
        BucketMap::new(self.buckets.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }

    /// Maximum file age for eligibility
    pub fn recency_window(&self) -> Duration {
        Duration::from_secs(self.recency_days.saturating_mul(SECONDS_PER_DAY))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.retry_delay_secs))
    }
}

/// Load the YAML file when one is given, otherwise start from defaults.
pub fn load_config(path: Option<&Path>) -> Result<SyncConfig> {
    match path {
        Some(path) => SyncConfig::from_yaml_file(path),
        None => {
            debug!("No config file given, using defaults");
            Ok(SyncConfig::default())
        }
    }
}
