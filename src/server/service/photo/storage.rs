//! Object storage client for uploaded photos.
//!
//! Objects are written with `PUT {endpoint}/{bucket}/{key}` and removed with `DELETE` on the
//! same URL, both authenticated with a bearer token. Uploaded objects are served publicly
//! from `{public_url}/{key}`.

use chrono::{Datelike, Utc};
use rand::{distr::Alphanumeric, Rng};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::server::{config::StorageConfig, error::AppError};

const KEY_SUFFIX_LENGTH: usize = 16;

/// Maps an accepted image content type to the file extension used in object keys.
///
/// Returns `None` for anything that is not a supported image type.
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[derive(Clone)]
pub struct StorageClient {
    http_client: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(http_client: reqwest::Client, config: StorageConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Builds a fresh object key of the form `photos/{yyyy}/{mm}/{random}.{ext}`.
    pub fn generate_key(extension: &str) -> String {
        let now = Utc::now();
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(KEY_SUFFIX_LENGTH)
            .map(char::from)
            .collect();

        format!(
            "photos/{:04}/{:02}/{}.{}",
            now.year(),
            now.month(),
            suffix,
            extension
        )
    }

    /// Public URL an object is served from once uploaded.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.public_url.trim_end_matches('/'), key)
    }

    /// Uploads `bytes` under `key`.
    ///
    /// # Returns
    /// - `Ok(url)` - Public URL of the stored object
    /// - `Err(AppError::ReqwestErr)` - The request failed or the storage API returned an error status
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.http_client
            .put(self.object_url(key))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Uploaded object {}", key);

        Ok(self.public_url(key))
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.http_client
            .delete(self.object_url(key))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Deleted object {}", key);

        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }
}
