use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A report file paired with the bucket it belongs in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub bucket: String,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, bucket: impl Into<String>) -> Self {
        Candidate {
            path: path.into(),
            bucket: bucket.into(),
        }
    }

    /// Object key for this file: its base name.
    pub fn key(&self) -> String {
        object_key(&self.path)
    }
}

/// Object key derived from a local path (the file's base name).
pub fn object_key(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Why an upload was requested
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadReason {
    Missing,
    Stale,
}

/// Result of comparing a local file with its remote copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDecision {
    Upload(UploadReason),
    Skip,
    /// Detection itself failed; callers treat this as a skip
    Error(String),
}

/// Why a file was not uploaded this run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    UpToDate,
    DetectionFailed(String),
    DryRun,
}

/// Terminal state of one candidate
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Uploaded { attempts: usize },
    Skipped { skip: SkipReason },
    Failed { attempts: usize, error: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub bucket: String,
    pub key: String,
    pub outcome: Outcome,
}

/// A report-named file the filter refused to turn into a candidate
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    UnknownAgency { path: PathBuf, agency: String },
    Unreadable { path: Option<PathBuf>, error: String },
}
