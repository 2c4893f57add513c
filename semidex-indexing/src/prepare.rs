//! Assembles upsertable records from raw text.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use semidex_core::{ContractViolation, EmbeddingModel, IndexedRecord};

/// Turns a batch of raw texts into [`IndexedRecord`]s.
///
/// One embedding call per batch. Every record of a batch shares a single
/// upload timestamp taken at the start of preparation, so a batch stays
/// identifiable in the index after the fact.
#[derive(Debug, Clone)]
pub struct Preparer {
    embedder: Arc<dyn EmbeddingModel>,
}

impl Preparer {
    pub fn new(embedder: impl EmbeddingModel + 'static) -> Self {
        Self::from_arc(Arc::new(embedder))
    }

    pub fn from_arc(embedder: Arc<dyn EmbeddingModel>) -> Self {
        Self { embedder }
    }

    /// Embeds `texts` and zips them positionally into records.
    ///
    /// The record at position `i` carries the fingerprint and embedding of
    /// `texts[i]`.
    ///
    /// # Errors
    ///
    /// Propagates the embedding call's failure unchanged. Fails with
    /// [`ContractViolation::EmbeddingCountMismatch`] when the embedding
    /// call returns a different number of vectors than texts; no partial
    /// batch is ever returned.
    #[tracing::instrument(skip_all, fields(num_texts = texts.len()), err)]
    pub async fn prepare(&self, texts: Vec<String>) -> Result<Vec<IndexedRecord>> {
        let date_uploaded = Utc::now().timestamp_millis();

        let embeddings = self.embedder.embed(texts.clone()).await?;

        if embeddings.len() != texts.len() {
            return Err(ContractViolation::EmbeddingCountMismatch {
                expected: texts.len(),
                got: embeddings.len(),
            }
            .into());
        }

        Ok(texts
            .into_iter()
            .zip(embeddings)
            .map(|(text, values)| IndexedRecord::from_text(text, values, date_uploaded))
            .collect())
    }
}
