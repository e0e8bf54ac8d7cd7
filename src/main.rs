use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use tokio::runtime::Runtime;

use report_sync::cli::{Args, Commands};
use report_sync::cloud::s3::S3Gateway;
use report_sync::config::{apply_env_overrides, load_config, process_env, SyncConfig};
use report_sync::sync::run_sync;
use report_sync::utils::summary::write_run_summary;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Handle subcommands before touching the environment
    if let Some(cmd) = &args.command {
        initialize_logging(args.verbose, None)?;
        return handle_subcommand(cmd);
    }

    // Load and layer configuration
    let config = load_and_process_config(&args)?;

    // Initialize logging
    initialize_logging(args.verbose, config.log_file.as_deref())?;

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;

    let started = Utc::now();
    let results = runtime.block_on(async {
        let gateway = S3Gateway::connect(config.region.as_deref(), config.profile.as_deref())?;
        Ok::<_, anyhow::Error>(run_sync(&config, gateway, args.dry_run).await)
    })?;
    let finished = Utc::now();

    if let Some(summary_path) = &args.summary {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        write_run_summary(summary_path, &hostname, &config, started, finished, &results)?;
    }

    info!("Report sync finished");
    Ok(())
}

/// Initialize terminal logging, plus an appending file sink when configured
fn initialize_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .context(format!("Failed to open log file {}", path.display()))?;
        loggers.push(WriteLogger::new(log_level, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            SyncConfig::default().save_to_yaml_file(path)?;
            Ok(())
        }
    }
}

/// Defaults, then YAML, then environment, then command line
fn load_and_process_config(args: &Args) -> Result<SyncConfig> {
    let mut config = load_config(args.config.as_deref())?;
    apply_env_overrides(&mut config, process_env)?;
    args.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}
