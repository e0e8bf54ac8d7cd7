// Re-export all items from the submodules
mod bucket_map;
mod env_vars;
mod sync_config;

pub use bucket_map::BucketMap;

pub use sync_config::{load_config, SyncConfig};

pub use env_vars::{apply_env_overrides, bucket_env_var, process_env};
