use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::cloud::gateway::StorageGateway;
use crate::models::{object_key, ChangeDecision, UploadReason};

/// Decide whether `path` needs to be uploaded to `bucket`.
///
/// The remote object is keyed by the file's base name. A missing object or
/// one older than the local file means upload; an object at least as fresh
/// means skip. Any failure other than "not found" yields
/// [`ChangeDecision::Error`], never an upload.
pub async fn detect_change<G>(gateway: &G, path: &Path, bucket: &str) -> ChangeDecision
where
    G: StorageGateway + ?Sized,
{
    let key = object_key(path);

    let remote = match gateway.head(bucket, &key).await {
        Ok(Some(remote)) => remote,
        Ok(None) => {
            info!("'{}' not found in bucket '{}', will upload: {}", key, bucket, path.display());
            return ChangeDecision::Upload(UploadReason::Missing);
        }
        Err(e) => {
            error!("Change detection failed for {} in bucket '{}': {:#}", path.display(), bucket, e);
            return ChangeDecision::Error(format!("{:#}", e));
        }
    };

    let local = match local_modified(path) {
        Ok(local) => local,
        Err(e) => {
            error!("Change detection failed for {}: cannot read modification time: {}", path.display(), e);
            return ChangeDecision::Error(e.to_string());
        }
    };

    if local > remote.last_modified {
        info!(
            "File changed since last upload ({} > {}), will upload: {}",
            local, remote.last_modified, path.display()
        );
        ChangeDecision::Upload(UploadReason::Stale)
    } else {
        info!("No changes detected for file: {}, skipping upload.", path.display());
        ChangeDecision::Skip
    }
}

fn local_modified(path: &Path) -> std::io::Result<DateTime<Utc>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}
