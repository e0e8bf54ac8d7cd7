use anyhow::{Context, Result};
use log::warn;
use rusoto_core::{HttpClient, Region};
use rusoto_credential::ProfileProvider;
use rusoto_s3::S3Client;

/// Resolve a region name, falling back to the environment default
pub fn resolve_region(region_name: Option<&str>) -> Region {
    match region_name {
        Some(name) => match name.parse::<Region>() {
            Ok(r) => r,
            Err(_) => {
                warn!("Invalid region '{}', using default", name);
                Region::default()
            }
        },
        None => Region::default(),
    }
}

/// Create an S3 client with the specified region and profile
pub fn create_s3_client(region_name: Option<&str>, profile: Option<&str>) -> Result<S3Client> {
    let region = resolve_region(region_name);

    let client = match profile {
        Some(profile_name) => match ProfileProvider::new() {
            Ok(mut provider) => {
                provider.set_profile(profile_name);
                let http_client = HttpClient::new().context("Failed to create HTTP client")?;
                S3Client::new_with(http_client, provider, region)
            }
            Err(e) => {
                warn!("Failed to create AWS profile provider: {}, using default", e);
                S3Client::new(region)
            }
        },
        None => S3Client::new(region),
    };

    Ok(client)
}
