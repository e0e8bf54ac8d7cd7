use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::debug;

use crate::config::sync_config::SyncConfig;
use crate::constants::{
    ENV_BUCKET_SUFFIX, ENV_ENVIRONMENT, ENV_MAX_ATTEMPTS, ENV_RECENCY_DAYS, ENV_RETRY_DELAY_SECS,
    ENV_ROOT_DIR,
};

/// Read a variable from the process environment, treating empty as unset
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Name of the variable that overrides an agency's bucket
pub fn bucket_env_var(agency: &str) -> String {
    format!("{}{}", agency, ENV_BUCKET_SUFFIX)
}

/// Apply environment overrides on top of `config`.
///
/// `lookup` resolves a variable name to its value; pass [`process_env`] for
/// the real environment.
pub fn apply_env_overrides<F>(config: &mut SyncConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup(ENV_ROOT_DIR) {
        debug!("{} overrides root directory: {}", ENV_ROOT_DIR, root);
        config.root_dir = PathBuf::from(root);
    }

    if let Some(environment) = lookup(ENV_ENVIRONMENT) {
        config.environment = environment;
    }

    for (agency, bucket) in config.buckets.iter_mut() {
        let var = bucket_env_var(agency);
        if let Some(value) = lookup(&var) {
            debug!("{} overrides bucket for '{}': {}", var, agency, value);
            *bucket = value;
        }
    }

    if let Some(days) = parse_var(&lookup, ENV_RECENCY_DAYS)? {
        config.recency_days = days;
    }
    if let Some(attempts) = parse_var(&lookup, ENV_MAX_ATTEMPTS)? {
        config.max_attempts = attempts;
    }
    if let Some(delay) = parse_var(&lookup, ENV_RETRY_DELAY_SECS)? {
        config.retry_delay_secs = delay;
    }

    Ok(())
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .context(format!("Invalid value for {}: '{}'", name, raw))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
