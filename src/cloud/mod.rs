//! Remote object storage for report uploads.
//!
//! The sync pass only talks to storage through [`gateway::StorageGateway`],
//! which needs two operations:
//!
//! - **head**: last-modified time of an object, or "not found"
//! - **put**: upload a local file under a key, overwriting any existing object
//!
//! [`s3::S3Gateway`] implements it on top of rusoto. Tests substitute an
//! in-memory implementation.
//!
//! ## Usage Example
//!
//! ```no_run
//! use report_sync::cloud::gateway::StorageGateway;
//! use report_sync::cloud::s3::S3Gateway;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let gateway = S3Gateway::connect(Some("us-east-1"), None)?;
//! if gateway.head("agency1-s3-bucket", "X_Report.pdf").await?.is_none() {
//!     gateway.put("agency1-s3-bucket", "X_Report.pdf", Path::new("/srv/submissions/agency1/X_Report.pdf")).await?;
//! }
//! # Ok(())
//! # }
//! ```

/// rusoto S3 client construction
pub mod client;

/// Storage abstraction used by the sync pass
pub mod gateway;

/// S3 implementation of the storage abstraction
pub mod s3;
