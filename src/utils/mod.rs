//! Reporting utilities for sync runs.
//!
//! ### Writing a Run Summary
//!
//! ```no_run
//! use report_sync::config::SyncConfig;
//! use report_sync::sync::SyncResults;
//! use report_sync::utils::summary::write_run_summary;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let now = chrono::Utc::now();
//! write_run_summary(
//!     Path::new("/tmp/summary.json"),
//!     "fileserver-01",
//!     &SyncConfig::default(),
//!     now,
//!     now,
//!     &SyncResults::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod summary;
