//! # report-sync
//!
//! Scans a directory tree for recently modified agency report files and
//! uploads each one to the S3 bucket mapped to its agency folder, but only
//! when the remote copy is missing or older than the local file.
//!
//! ## Overview
//!
//! A pass walks the configured root, keeps files named `*Report.pdf` that
//! were modified within the recency window, and derives the agency from the
//! immediate parent folder (lower-cased). For each candidate the remote
//! object's last-modified time decides between upload and skip. Uploads are
//! retried a fixed number of times with a constant delay. One file's failure
//! never stops the rest of the pass.
//!
//! ## Usage
//!
//! ```no_run
//! use report_sync::cloud::s3::S3Gateway;
//! use report_sync::config::SyncConfig;
//! use report_sync::sync::run_sync;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SyncConfig::default();
//! let gateway = S3Gateway::connect(config.region.as_deref(), config.profile.as_deref())?;
//! let results = run_sync(&config, gateway, false).await;
//! println!("{} uploaded, {} failed", results.uploaded(), results.failed());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`models`]: Candidates, decisions and per-file outcomes
//! - [`config`]: Configuration layering and the agency bucket map
//! - [`cloud`]: Storage gateway abstraction and the S3 implementation
//! - [`sync`]: Filter, change detection, retry and orchestration
//! - [`utils`]: Run summary reporting
//! - [`constants`]: Defaults and environment variable names

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models used throughout the pass
pub mod models;

/// Cloud storage integration (S3)
pub mod cloud;

/// Configuration management
pub mod config;

/// The synchronization pass
pub mod sync;

/// Run summary reporting
pub mod utils;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
