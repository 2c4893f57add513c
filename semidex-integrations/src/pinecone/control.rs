//! Control plane calls: listing and creating indexes.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use reqwest::Method;
use semidex_core::{IndexControl, IndexDescriptor, IndexSummary};

use super::Pinecone;
use super::types::{CreateIndexRequest, ListIndexesResponse};

#[async_trait]
impl IndexControl for Pinecone {
    #[tracing::instrument(skip_all, err)]
    async fn list_indexes(&self) -> Result<Option<Vec<IndexSummary>>> {
        let url = format!("{}/indexes", self.api_base);
        let response: ListIndexesResponse = self
            .request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode index listing")?;

        Ok(response
            .indexes
            .map(|indexes| indexes.into_iter().map(Into::into).collect()))
    }

    #[tracing::instrument(skip_all, fields(index = %descriptor.name), err)]
    async fn create_index(&self, descriptor: &IndexDescriptor) -> Result<()> {
        let url = format!("{}/indexes", self.api_base);
        self.request(Method::POST, &url)
            .json(&CreateIndexRequest::from(descriptor))
            .send()
            .await?
            .error_for_status()
            .context("Index creation rejected")?;

        Ok(())
    }
}
