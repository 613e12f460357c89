//! AWS S3 (or S3-compatible) blob store.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::{debug, info};

use crate::domain::repositories::{BlobStore, StorageError};

/// Reads objects from a single S3 bucket.
///
/// The SDK client is cheap to clone and safe to share across tasks, so one
/// store is built at startup and reused for every request.
#[derive(Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Wraps an existing client.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds a client from the default AWS credential chain.
    ///
    /// # Arguments
    ///
    /// - `region` - AWS region, e.g. `"us-east-1"`
    /// - `endpoint_url` - custom endpoint for S3-compatible stores (MinIO, LocalStack)
    /// - `force_path_style` - address buckets as `endpoint/bucket` instead of
    ///   `bucket.endpoint`
    pub async fn connect(
        bucket: impl Into<String>,
        region: &str,
        endpoint_url: Option<&str>,
        force_path_style: bool,
    ) -> Self {
        let bucket = bucket.into();
        info!("Configuring S3 client for bucket {} in {}", bucket, region);

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(force_path_style);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()), bucket)
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                let no_such_key = err.as_service_error().is_some_and(|e| e.is_no_such_key())
                    || err
                        .raw_response()
                        .is_some_and(|r| r.status().as_u16() == 404);

                if no_such_key {
                    debug!("S3 MISS: s3://{}/{}", self.bucket, key);
                    return Err(StorageError::NotFound(key.to_string()));
                }

                return Err(StorageError::Backend(
                    DisplayErrorContext(&err).to_string(),
                ));
            }
        };

        let bytes = output.body.collect().await.map_err(|e| {
            StorageError::Backend(format!("failed to read body of {}: {}", key, e))
        })?;

        debug!("S3 GET: s3://{}/{}", self.bucket, key);
        Ok(bytes.into_bytes().to_vec())
    }

    async fn health_check(&self) -> bool {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok()
    }
}
