//! This module provides integration with the Pinecone serverless vector
//! index. It talks REST to both planes: the control plane for listing and
//! creating indexes, and the per-index data plane host for upserts.
//!
//! Can be cloned with relative low cost as the HTTP client is shared.

mod control;
mod persist;
mod types;

use anyhow::{Context as _, Result};
use derive_builder::Builder;
use reqwest::Method;
use secrecy::{ExposeSecret as _, SecretString};

use types::IndexModel;

const DEFAULT_API_BASE: &str = "https://api.pinecone.io";

/// Version header sent with every request to either plane.
const API_VERSION: &str = "2025-01";

/// A client for the Pinecone REST API, implementing both the
/// [`IndexControl`](semidex_core::IndexControl) and
/// [`VectorIndex`](semidex_core::VectorIndex) seams of the pipeline.
#[derive(Debug, Clone, Builder)]
#[builder(
    pattern = "owned",
    setter(into, strip_option),
    build_fn(error = "anyhow::Error")
)]
pub struct Pinecone {
    /// HTTP client shared by both planes.
    #[builder(default)]
    client: reqwest::Client,
    /// Control plane base URL.
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
    /// API key, read from `PINECONE_API_KEY` when not set explicitly. Only
    /// sent with requests, never validated locally.
    #[builder(default = "PineconeBuilder::default_api_key()")]
    api_key: SecretString,
    /// Name of the index the data plane writes to.
    index_name: String,
    /// Base URL of the target index's data plane. Resolved through the
    /// control plane when not pinned here.
    #[builder(default)]
    index_host: Option<String>,
}

impl Pinecone {
    /// Returns a new `PineconeBuilder` for constructing a `Pinecone`
    /// instance.
    pub fn builder() -> PineconeBuilder {
        PineconeBuilder::default()
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("Api-Key", self.api_key.expose_secret())
            .header("X-Pinecone-API-Version", API_VERSION)
    }

    /// Resolves the base URL of the target index's data plane.
    ///
    /// The control plane reports the host without a scheme.
    async fn data_plane_url(&self) -> Result<String> {
        if let Some(host) = &self.index_host {
            return Ok(host.clone());
        }

        let index = self.describe_index().await?;
        if index.host.starts_with("http") {
            Ok(index.host)
        } else {
            Ok(format!("https://{}", index.host))
        }
    }

    async fn describe_index(&self) -> Result<IndexModel> {
        let url = format!("{}/indexes/{}", self.api_base, self.index_name);
        self.request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode index description")
    }
}

impl PineconeBuilder {
    fn default_api_key() -> SecretString {
        std::env::var("PINECONE_API_KEY").unwrap_or_default().into()
    }
}
