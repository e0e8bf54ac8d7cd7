use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::config::SyncConfig;
use crate::sync::SyncResults;

/// Create a JSON summary of a sync run.
///
/// # Arguments
///
/// * `hostname` - Host the pass ran on
/// * `config` - Effective configuration of the run
/// * `started` / `finished` - Wall-clock bounds of the pass
/// * `results` - Per-file outcomes and filter rejections
///
/// # Example Output
///
/// ```json
/// {
///   "run_id": "550e8400-e29b-41d4-a716-446655440000",
///   "hostname": "fileserver-01",
///   "environment": "test",
///   "root_dir": "/srv/submissions",
///   "counts": { "uploaded": 2, "skipped": 5, "detection_failed": 0, "failed": 0, "rejected": 1 },
///   "files": [...],
///   "rejections": [...]
/// }
/// ```
pub fn create_run_summary(
    hostname: &str,
    config: &SyncConfig,
    started: DateTime<Utc>,
    finished: DateTime<Utc>,
    results: &SyncResults,
) -> Result<String> {
    let summary = json!({
        "run_id": Uuid::new_v4().to_string(),
        "hostname": hostname,
        "environment": config.environment,
        "root_dir": config.root_dir,
        "recency_days": config.recency_days,
        "started_at": started.to_rfc3339(),
        "finished_at": finished.to_rfc3339(),
        "duration_seconds": (finished - started).num_milliseconds() as f64 / 1000.0,
        "sync_version": env!("CARGO_PKG_VERSION"),
        "counts": {
            "uploaded": results.uploaded(),
            "skipped": results.skipped(),
            "detection_failed": results.detection_failures(),
            "failed": results.failed(),
            "rejected": results.rejections.len(),
        },
        "files": results.outcomes,
        "rejections": results.rejections,
    });

    serde_json::to_string_pretty(&summary).context("Failed to serialize run summary to JSON")
}

/// Write the run summary to `path`
pub fn write_run_summary(
    path: &Path,
    hostname: &str,
    config: &SyncConfig,
    started: DateTime<Utc>,
    finished: DateTime<Utc>,
    results: &SyncResults,
) -> Result<()> {
    let summary = create_run_summary(hostname, config, started, finished, results)?;
    fs::write(path, summary).context(format!("Failed to write run summary to {}", path.display()))?;
    info!("Run summary written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileOutcome, Outcome, Rejection, SkipReason};
    use chrono::TimeZone;
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_results() -> SyncResults {
        SyncResults {
            outcomes: vec![
                FileOutcome {
                    path: PathBuf::from("/srv/submissions/agency1/X_Report.pdf"),
                    bucket: "agency1-s3-bucket".to_string(),
                    key: "X_Report.pdf".to_string(),
                    outcome: Outcome::Uploaded { attempts: 2 },
                },
                FileOutcome {
                    path: PathBuf::from("/srv/submissions/agency3/W_Report.pdf"),
                    bucket: "agency3-s3-bucket".to_string(),
                    key: "W_Report.pdf".to_string(),
                    outcome: Outcome::Skipped {
                        skip: SkipReason::DetectionFailed("timeout".to_string()),
                    },
                },
            ],
            rejections: vec![Rejection::UnknownAgency {
                path: PathBuf::from("/srv/submissions/unknownagency/Y_Report.pdf"),
                agency: "unknownagency".to_string(),
            }],
        }
    }

    #[test]
    fn test_summary_fields() {
        let started = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let finished = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 30).unwrap();
        let json_str =
            create_run_summary("test-host", &SyncConfig::default(), started, finished, &sample_results()).unwrap();
        let json: Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(json["hostname"], "test-host");
        assert_eq!(json["environment"], "test");
        assert!(json["run_id"].is_string());
        assert_eq!(json["duration_seconds"], 30.0);
        assert_eq!(json["counts"]["uploaded"], 1);
        assert_eq!(json["counts"]["skipped"], 1);
        assert_eq!(json["counts"]["detection_failed"], 1);
        assert_eq!(json["counts"]["rejected"], 1);

        assert_eq!(json["files"][0]["outcome"]["status"], "uploaded");
        assert_eq!(json["files"][0]["outcome"]["attempts"], 2);
        assert_eq!(json["files"][1]["outcome"]["skip"]["reason"], "detection_failed");
        assert_eq!(json["rejections"][0]["reason"], "unknown_agency");
        assert_eq!(json["rejections"][0]["agency"], "unknownagency");
    }

    #[test]
    fn test_write_summary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.json");
        let now = Utc::now();

        write_run_summary(&path, "host", &SyncConfig::default(), now, now, &SyncResults::default()).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["counts"]["uploaded"], 0);
        assert_eq!(json["files"].as_array().unwrap().len(), 0);
    }
}
