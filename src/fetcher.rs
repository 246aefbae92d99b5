use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::config::REQUEST_TIMEOUT;
use crate::file_manager::FileManager;

/// Why a single asset could not be downloaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Request(reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(err)
        }
    }
}

/// Result of downloading one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { bytes: u64 },
    Failed { reason: String },
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }
}

/// Anything that can hand back the body of an asset URL.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches assets over HTTP(S), one GET per call.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: Client,
}

impl HttpAssetSource {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Downloads `url` into `local_path` under the output root.
///
/// Parent directories are created before the request goes out. Every failure
/// (network, status, timeout, disk) comes back as [`DownloadOutcome::Failed`];
/// nothing here aborts the run.
pub async fn download_asset<S>(
    source: &S,
    files: &FileManager,
    url: &str,
    local_path: &str,
) -> DownloadOutcome
where
    S: AssetSource + ?Sized,
{
    match try_download(source, files, url, local_path).await {
        Ok(bytes) => DownloadOutcome::Saved { bytes },
        Err(e) => {
            tracing::warn!(url, local_path, error = %e, "asset download failed");
            DownloadOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_download<S>(
    source: &S,
    files: &FileManager,
    url: &str,
    local_path: &str,
) -> Result<u64, FetchError>
where
    S: AssetSource + ?Sized,
{
    let write_error = |err: io::Error| FetchError::Io {
        path: files.resolve(local_path),
        source: err,
    };

    files.prepare(local_path).map_err(write_error)?;

    tracing::debug!(url, "fetching asset");
    let body = source.fetch(url).await?;

    files.save_file(local_path, &body).map_err(write_error)?;
    Ok(body.len() as u64)
}
