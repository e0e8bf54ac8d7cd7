//! Global constants for report-sync.
//!
//! Every default used by the configuration layer and the sync pass lives here
//! so the behavior of a bare invocation can be read in one place.

// Eligibility
/// File name suffix a report must end with (case-sensitive)
pub const REPORT_SUFFIX: &str = "Report.pdf";

/// Default recency window in days
pub const DEFAULT_RECENCY_DAYS: u64 = 7;

/// Seconds per day, used to turn the window into seconds
pub const SECONDS_PER_DAY: u64 = 86_400;

// Upload retry
/// Maximum upload attempts per file
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Fixed delay between upload attempts in seconds
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 2;

// Configuration defaults
/// Default environment label
pub const DEFAULT_ENVIRONMENT: &str = "test";

/// Default scan root on Windows hosts
pub const DEFAULT_WINDOWS_ROOT: &str = r"E:\Project\submissions";

/// Default scan root elsewhere
pub const DEFAULT_UNIX_ROOT: &str = "/srv/submissions";

/// Default log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "submission_Report_Update.log";

/// Known agencies and their default buckets
pub const DEFAULT_BUCKETS: &[(&str, &str)] = &[
    ("agency1", "agency1-s3-bucket"),
    ("agency2", "agency2-s3-bucket"),
    ("agency3", "agency3-s3-bucket"),
];

// Environment variable names
/// Overrides the scan root
pub const ENV_ROOT_DIR: &str = "SHARED_submission_DIR";

/// Overrides the environment label
pub const ENV_ENVIRONMENT: &str = "ENV";

/// Suffix appended to an agency name to form its bucket override variable
pub const ENV_BUCKET_SUFFIX: &str = "_BUCKET";

/// Overrides the recency window in days
pub const ENV_RECENCY_DAYS: &str = "REPORT_SYNC_RECENCY_DAYS";

/// Overrides the maximum number of upload attempts
pub const ENV_MAX_ATTEMPTS: &str = "REPORT_SYNC_MAX_ATTEMPTS";

/// Overrides the delay between upload attempts in seconds
pub const ENV_RETRY_DELAY_SECS: &str = "REPORT_SYNC_RETRY_DELAY_SECS";
