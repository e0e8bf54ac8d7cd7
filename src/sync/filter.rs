use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::BucketMap;
use crate::constants::REPORT_SUFFIX;
use crate::models::{Candidate, Rejection};

/// Candidates found under a root, plus the report files that were refused.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResult {
    pub candidates: Vec<Candidate>,
    pub rejections: Vec<Rejection>,
}

/// Selects recent report files and maps each to its agency's bucket.
pub struct EligibilityFilter {
    buckets: BucketMap,
    window: Duration,
}

impl EligibilityFilter {
    pub fn new(buckets: BucketMap, window: Duration) -> Self {
        EligibilityFilter { buckets, window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Scan `root` using the current time as the reference point.
    pub fn scan(&self, root: &Path) -> ScanResult {
        self.scan_at(root, SystemTime::now())
    }

    /// Scan `root`, measuring file ages against `now`.
    ///
    /// Entries that cannot be read are recorded as rejections and the walk
    /// continues. Candidate order follows the filesystem and carries no meaning.
    pub fn scan_at(&self, root: &Path, now: SystemTime) -> ScanResult {
        let mut result = ScanResult::default();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    result.rejections.push(Rejection::Unreadable {
                        path: e.path().map(Path::to_path_buf),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if !entry.file_name().to_string_lossy().ends_with(REPORT_SUFFIX) {
                continue;
            }

            // fs::metadata follows symlinks, so a dangling link lands here
            let modified = match fs::metadata(path).and_then(|meta| meta.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    warn!("Skipping unreadable file {}: {}", path.display(), e);
                    result.rejections.push(Rejection::Unreadable {
                        path: Some(path.to_path_buf()),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if !is_within_window(modified, now, self.window) {
                debug!("Not eligible (older than {:?}): {}", self.window, path.display());
                continue;
            }

            let agency = agency_key(path);
            match self.buckets.get(&agency) {
                Some(bucket) => {
                    info!("Eligible file: {}", path.display());
                    result.candidates.push(Candidate::new(path, bucket));
                }
                None => {
                    warn!("Unknown folder '{}' for file: {}", agency, path.display());
                    result.rejections.push(Rejection::UnknownAgency {
                        path: path.to_path_buf(),
                        agency,
                    });
                }
            }
        }

        result
    }
}

/// Lower-cased name of the file's immediate parent directory.
pub fn agency_key(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True when a file modified at `modified` is at most `window` old at `now`.
///
/// Timestamps in the future count as age zero.
pub fn is_within_window(modified: SystemTime, now: SystemTime, window: Duration) -> bool {
    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    age <= window
}
