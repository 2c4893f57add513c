use anyhow::{Context as _, Result};
use async_openai::types::embeddings::CreateEmbeddingRequestArgs;
use async_trait::async_trait;
use semidex_core::{ContractViolation, EmbeddingModel, Embeddings};

use super::OpenAI;

#[async_trait]
impl EmbeddingModel for OpenAI {
    async fn embed(&self, input: Vec<String>) -> Result<Embeddings> {
        let model = self
            .default_options
            .embed_model
            .as_ref()
            .context("Embedding model not set")?;

        let num_texts = input.len();

        let request = CreateEmbeddingRequestArgs::default()
            .model(model)
            .input(input)
            .build()?;

        tracing::debug!(num_texts, model = %model, "[Embed] Request to openai");

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .context("Embedding request failed")?;

        // A partial response would corrupt the positional alignment between
        // texts and vectors downstream.
        if response.data.len() != num_texts {
            return Err(ContractViolation::EmbeddingCountMismatch {
                expected: num_texts,
                got: response.data.len(),
            }
            .into());
        }

        tracing::debug!(num_embeddings = response.data.len(), "[Embed] Response openai");

        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }
}
