use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use rusoto_core::{ByteStream, RusotoError};
use rusoto_s3::{HeadObjectError, HeadObjectRequest, PutObjectRequest, S3Client, S3};

use crate::cloud::client::create_s3_client;
use crate::cloud::gateway::{RemoteObject, StorageGateway};

/// [`StorageGateway`] backed by Amazon S3.
///
/// The client is constructed once and reused for every call of a run.
pub struct S3Gateway {
    client: S3Client,
}

impl S3Gateway {
    pub fn new(client: S3Client) -> Self {
        S3Gateway { client }
    }

    /// Build a gateway for the given region and credential profile.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use report_sync::cloud::s3::S3Gateway;
    /// let gateway = S3Gateway::connect(Some("us-east-1"), None).unwrap();
    /// ```
    pub fn connect(region_name: Option<&str>, profile: Option<&str>) -> Result<Self> {
        Ok(Self::new(create_s3_client(region_name, profile)?))
    }
}

#[async_trait::async_trait]
impl StorageGateway for S3Gateway {
    async fn head(&self, bucket: &str, key: &str) -> Result<Option<RemoteObject>> {
        let request = HeadObjectRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            ..Default::default()
        };

        match self.client.head_object(request).await {
            Ok(output) => {
                let raw = output
                    .last_modified
                    .ok_or_else(|| anyhow!("No LastModified for s3://{}/{}", bucket, key))?;
                let last_modified = parse_last_modified(&raw)?;
                debug!("s3://{}/{} last modified {}", bucket, key, last_modified);
                Ok(Some(RemoteObject { last_modified }))
            }
            // HEAD responses carry no body, so a missing key usually surfaces as a bare 404
            Err(RusotoError::Service(HeadObjectError::NoSuchKey(_))) => Ok(None),
            Err(RusotoError::Unknown(ref response)) if response.status.as_u16() == 404 => Ok(None),
            Err(e) => Err(anyhow!("Failed to check s3://{}/{}: {}", bucket, key, e)),
        }
    }

    async fn put(&self, bucket: &str, key: &str, path: &Path) -> Result<()> {
        let contents = tokio::fs::read(path)
            .await
            .context(format!("Failed to read {} for S3 upload", path.display()))?;

        let request = PutObjectRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: Some(ByteStream::from(contents)),
            ..Default::default()
        };

        self.client
            .put_object(request)
            .await
            .map_err(|e| anyhow!("Failed to upload to s3://{}/{}: {}", bucket, key, e))?;

        Ok(())
    }
}

/// Parse the `Last-Modified` header value S3 returns (RFC 1123).
pub fn parse_last_modified(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|ts| ts.with_timezone(&Utc))
        .context(format!("Unrecognized LastModified timestamp: '{}'", raw))
}
