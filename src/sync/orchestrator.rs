use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::cloud::gateway::StorageGateway;
use crate::models::{Candidate, ChangeDecision, FileOutcome, Outcome, Rejection, SkipReason};
use crate::sync::detector::detect_change;
use crate::sync::filter::EligibilityFilter;
use crate::sync::retry::{upload_with_retry, RetryPolicy};

/// Per-file results of one synchronization pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SyncResults {
    pub outcomes: Vec<FileOutcome>,
    pub rejections: Vec<Rejection>,
}

impl SyncResults {
    pub fn uploaded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Uploaded { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Skips caused by a failed change check rather than an up-to-date remote
    pub fn detection_failures(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { skip: SkipReason::DetectionFailed(_) }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Drives a full pass: filter, detect, upload with retry.
///
/// Candidates are processed one at a time, each to completion. A failure on
/// one file is recorded and never stops the ones after it.
pub struct Synchronizer<G> {
    gateway: G,
    filter: EligibilityFilter,
    retry: RetryPolicy,
    dry_run: bool,
}

impl<G: StorageGateway> Synchronizer<G> {
    pub fn new(gateway: G, filter: EligibilityFilter, retry: RetryPolicy) -> Self {
        Synchronizer {
            gateway,
            filter,
            retry,
            dry_run: false,
        }
    }

    /// Detect changes but never upload
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn run(&self, root: &Path) -> SyncResults {
        let scan = self.filter.scan(root);
        info!("Total files to check: {}", scan.candidates.len());

        let mut outcomes = Vec::with_capacity(scan.candidates.len());
        for candidate in &scan.candidates {
            outcomes.push(self.process(candidate).await);
        }

        SyncResults {
            outcomes,
            rejections: scan.rejections,
        }
    }

    /// Check one candidate and upload it if the remote copy is missing or stale
    pub async fn process(&self, candidate: &Candidate) -> FileOutcome {
        let decision = detect_change(&self.gateway, &candidate.path, &candidate.bucket).await;

        let outcome = match decision {
            ChangeDecision::Upload(_) if self.dry_run => {
                info!("Dry run, not uploading: {}", candidate.path.display());
                Outcome::Skipped { skip: SkipReason::DryRun }
            }
            ChangeDecision::Upload(_) => upload_with_retry(&self.gateway, candidate, &self.retry).await,
            ChangeDecision::Skip => Outcome::Skipped { skip: SkipReason::UpToDate },
            ChangeDecision::Error(error) => {
                warn!("Skipping {} because change detection failed", candidate.path.display());
                Outcome::Skipped { skip: SkipReason::DetectionFailed(error) }
            }
        };

        FileOutcome {
            path: candidate.path.clone(),
            bucket: candidate.bucket.clone(),
            key: candidate.key(),
            outcome,
        }
    }
}
