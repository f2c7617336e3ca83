//! S3 sync client.

use std::path::{Path, PathBuf};

use aws_sdk_s3::config::{BehaviorVersion, Credentials, HttpClient, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use log::{error, info};

use crate::config::AwsCredentials;
use crate::error_handling::SyncError;
use crate::initialization::ensure_parent_directory_exists;

fn config_builder(credentials: &AwsCredentials) -> aws_sdk_s3::config::Builder {
    let provider = Credentials::new(
        credentials.access_key_id.clone(),
        credentials.secret_access_key.clone(),
        None,
        None,
        "environment",
    );

    aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(credentials.region.clone()))
        .credentials_provider(provider)
}

/// Client that mirrors the local database file against a single well-known
/// S3 location.
///
/// Both transfer operations are single-attempt with no retry, no resume and
/// no checksum verification. Construction requires a complete
/// [`AwsCredentials`] set; gating on missing credentials happens in
/// [`AwsCredentials::from_env`], before this client exists.
pub struct SyncClient {
    client: Client,
    bucket: String,
    key: String,
    local_path: PathBuf,
}

impl SyncClient {
    /// Builds a client from an explicit credential set and fixed addressing.
    pub fn new(credentials: &AwsCredentials, bucket: &str, key: &str, local_path: &Path) -> Self {
        let config = config_builder(credentials).build();
        Self::from_config(config, bucket, key, local_path)
    }

    /// Builds a client with an explicit HTTP transport.
    ///
    /// Lets tests drive both transfer directions against a replayed
    /// transport instead of the network; production callers use
    /// [`SyncClient::new`], which keeps the SDK's default transport.
    pub fn with_http_client(
        credentials: &AwsCredentials,
        bucket: &str,
        key: &str,
        local_path: &Path,
        http_client: impl HttpClient + 'static,
    ) -> Self {
        let config = config_builder(credentials).http_client(http_client).build();
        Self::from_config(config, bucket, key, local_path)
    }

    fn from_config(config: aws_sdk_s3::Config, bucket: &str, key: &str, local_path: &Path) -> Self {
        Self {
            client: Client::from_conf(config),
            bucket: bucket.to_string(),
            key: key.to_string(),
            local_path: local_path.to_path_buf(),
        }
    }

    /// Downloads the database object into the local path, overwriting any
    /// existing file.
    pub async fn download(&self) -> Result<(), SyncError> {
        ensure_parent_directory_exists(&self.local_path).map_err(|e| {
            error!("Failed to create download directory: {e}");
            SyncError::FileError(e)
        })?;

        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!("Failed to download database from S3: {message}");
                SyncError::DownloadError(message)
            })?;

        let bytes = object.body.collect().await.map_err(|e| {
            error!("Failed to read S3 object body: {e}");
            SyncError::DownloadError(e.to_string())
        })?;

        tokio::fs::write(&self.local_path, bytes.into_bytes())
            .await
            .map_err(|e| {
                error!("Failed to write downloaded database file: {e}");
                SyncError::FileError(e)
            })?;

        info!(
            "Successfully downloaded {} from s3://{}/{} to {}",
            self.key,
            self.bucket,
            self.key,
            self.local_path.display()
        );
        Ok(())
    }

    /// Uploads the local database file to the bucket/key.
    pub async fn upload(&self) -> Result<(), SyncError> {
        let body = ByteStream::from_path(&self.local_path).await.map_err(|e| {
            error!("Failed to read local database file for upload: {e}");
            SyncError::UploadError(e.to_string())
        })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!("Failed to upload database to S3: {message}");
                SyncError::UploadError(message)
            })?;

        info!(
            "Successfully uploaded {} to s3://{}/{}",
            self.local_path.display(),
            self.bucket,
            self.key
        );
        Ok(())
    }
}
