//! Dataset retrieval from the Hugging Face Hub.

use std::path::Path;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use derive_builder::Builder;
use secrecy::{ExposeSecret as _, SecretString};
use semidex_core::DatasetFetcher;

const DEFAULT_HUB_BASE: &str = "https://huggingface.co";

/// Client for the Hugging Face Hub file API.
///
/// Downloads repository files over the `resolve/main` endpoint. The access
/// token is read from `HF_TOKEN` or `HUGGING_FACE_ACCESS_TOKEN` when not
/// set explicitly, and is only sent with requests, never validated locally;
/// gated datasets simply fail the download when the token is bad.
#[derive(Debug, Clone, Builder)]
#[builder(
    pattern = "owned",
    setter(into, strip_option),
    build_fn(error = "anyhow::Error")
)]
pub struct HfHub {
    #[builder(default)]
    client: reqwest::Client,
    #[builder(default = "DEFAULT_HUB_BASE.to_string()")]
    api_base: String,
    #[builder(default = "HfHubBuilder::default_token()")]
    token: SecretString,
}

impl HfHub {
    /// Returns a new `HfHubBuilder` for constructing a `HfHub` instance.
    pub fn builder() -> HfHubBuilder {
        HfHubBuilder::default()
    }

    /// Downloads `source_path` from `repo` and writes the payload to
    /// `destination`.
    pub async fn download_to(&self, repo: &str, source_path: &str, destination: &Path) -> Result<()> {
        let bytes = self.download(repo, source_path).await?;
        fs_err::tokio::write(destination, bytes)
            .await
            .context("Failed to write dataset file")?;

        tracing::info!(destination = %destination.display(), "Dataset file written");

        Ok(())
    }
}

impl HfHubBuilder {
    fn default_token() -> SecretString {
        std::env::var("HF_TOKEN")
            .or_else(|_| std::env::var("HUGGING_FACE_ACCESS_TOKEN"))
            .unwrap_or_default()
            .into()
    }
}

#[async_trait]
impl DatasetFetcher for HfHub {
    #[tracing::instrument(skip(self), err)]
    async fn download(&self, repo: &str, source_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{repo}/resolve/main/{source_path}", self.api_base);

        tracing::debug!(url, "Downloading dataset file");

        let mut request = self.client.get(&url);
        if !self.token.expose_secret().is_empty() {
            request = request.bearer_auth(self.token.expose_secret());
        }

        let response = request
            .send()
            .await?
            .error_for_status()
            .context("Dataset download failed")?;

        Ok(response.bytes().await?.to_vec())
    }
}
