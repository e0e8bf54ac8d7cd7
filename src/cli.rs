use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SyncConfig;

/// Command-line arguments for report-sync.
///
/// Every option here overrides the YAML file and the environment.
#[derive(Parser, Debug)]
#[clap(name = "report-sync", about = "Upload recently modified agency reports to S3")]
pub struct Args {
    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Directory tree to scan for reports
    #[clap(short, long)]
    pub root: Option<PathBuf>,

    /// Environment label recorded in logs and the run summary
    #[clap(short, long)]
    pub environment: Option<String>,

    /// Only files modified within this many days are considered
    #[clap(long)]
    pub recency_days: Option<u64>,

    /// Maximum upload attempts per file
    #[clap(long)]
    pub max_attempts: Option<usize>,

    /// Seconds to wait between upload attempts
    #[clap(long)]
    pub retry_delay: Option<u64>,

    /// AWS region for S3 requests
    #[clap(long)]
    pub region: Option<String>,

    /// AWS profile to use for S3 requests
    #[clap(long)]
    pub profile: Option<String>,

    /// Log file to append to
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Log to the terminal only
    #[clap(long)]
    pub no_log_file: bool,

    /// Check for changes without uploading anything
    #[clap(long)]
    pub dry_run: bool,

    /// Write a JSON run summary to this path
    #[clap(long)]
    pub summary: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = "report-sync.yaml")]
        path: PathBuf,
    },
}

impl Args {
    /// Apply command-line overrides on top of `config`
    pub fn apply_to(&self, config: &mut SyncConfig) {
        if let Some(root) = &self.root {
            config.root_dir = root.clone();
        }
        if let Some(environment) = &self.environment {
            config.environment = environment.clone();
        }
        if let Some(days) = self.recency_days {
            config.recency_days = days;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }
        if let Some(delay) = self.retry_delay {
            config.retry_delay_secs = delay;
        }
        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }
        if let Some(profile) = &self.profile {
            config.profile = Some(profile.clone());
        }
        if self.no_log_file {
            config.log_file = None;
        } else if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}
