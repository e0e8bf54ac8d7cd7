//! Report synchronization pass.
//!
//! ```text
//! EligibilityFilter ──▶ candidates ──▶ detect_change ──▶ upload_with_retry
//!        │                                  │                    │
//!   rejections                        skip / error         uploaded / failed
//! ```
//!
//! Everything runs sequentially on the caller's task.

/// Change detection against remote metadata
pub mod detector;

/// Directory walk and candidate selection
pub mod filter;

/// Per-candidate processing and result aggregation
pub mod orchestrator;

/// Bounded fixed-delay upload retry
pub mod retry;

use log::info;

use crate::cloud::gateway::StorageGateway;
use crate::config::SyncConfig;

pub use filter::{EligibilityFilter, ScanResult};
pub use orchestrator::{SyncResults, Synchronizer};
pub use retry::RetryPolicy;

/// Run one pass for `config` against `gateway`.
///
/// This is the single entry point for both the CLI and external triggers.
pub async fn run_sync<G: StorageGateway>(config: &SyncConfig, gateway: G, dry_run: bool) -> SyncResults {
    info!(
        "Scanning directory: {} (environment: {})",
        config.root_dir.display(),
        config.environment
    );

    let filter = EligibilityFilter::new(config.bucket_map(), config.recency_window());
    let synchronizer = Synchronizer::new(gateway, filter, config.retry_policy()).with_dry_run(dry_run);
    let results = synchronizer.run(&config.root_dir).await;

    info!(
        "Run complete: {} uploaded, {} skipped ({} detection failures), {} failed, {} rejected",
        results.uploaded(),
        results.skipped(),
        results.detection_failures(),
        results.failed(),
        results.rejections.len()
    );

    results
}
