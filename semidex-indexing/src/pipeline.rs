//! Orchestrates one ingestion run: provision, prepare, upsert.

use std::sync::Arc;

use anyhow::Result;
use derive_builder::Builder;
use semidex_core::{EmbeddingModel, IndexControl, IngestConfig, VectorIndex};

use crate::{Preparer, Provisioner};

/// Coordinates writes into the target index.
///
/// A run is a strict sequence of awaited steps: ensure the index exists,
/// embed and assemble the records, write them to the configured namespace
/// as one logical batch. Any failure aborts the remaining steps and
/// propagates unchanged; there is no partial-success signal. Because
/// records are keyed by content fingerprint, re-running after a failure is
/// safe and will not duplicate already written records.
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct Ingester {
    #[builder(setter(custom))]
    embedder: Arc<dyn EmbeddingModel>,
    #[builder(setter(custom))]
    control: Arc<dyn IndexControl>,
    #[builder(setter(custom))]
    index: Arc<dyn VectorIndex>,
    config: IngestConfig,
}

impl Ingester {
    pub fn builder() -> IngesterBuilder {
        IngesterBuilder::default()
    }

    /// Embeds `texts` and upserts the resulting records, provisioning the
    /// index first.
    ///
    /// Provisioning must succeed before anything is embedded or written.
    /// An empty batch still provisions but skips the embedding and write
    /// calls entirely.
    ///
    /// # Errors
    ///
    /// Propagates provisioning, embedding, and write failures unchanged.
    #[tracing::instrument(skip_all, fields(num_texts = texts.len(), namespace = %self.config.namespace), err)]
    pub async fn upsert_texts(&self, texts: Vec<String>) -> Result<()> {
        self.provisioner().ensure_index().await?;

        if texts.is_empty() {
            tracing::debug!("Nothing to ingest");
            return Ok(());
        }

        let records = self.preparer().prepare(texts).await?;

        tracing::debug!(num_records = records.len(), "Upserting records");
        self.index.upsert(&self.config.namespace, records).await
    }

    fn preparer(&self) -> Preparer {
        Preparer::from_arc(Arc::clone(&self.embedder))
    }

    fn provisioner(&self) -> Provisioner {
        Provisioner::from_arc(Arc::clone(&self.control), self.config.descriptor.clone())
    }
}

impl IngesterBuilder {
    /// Sets the embedding model used to vectorize texts.
    #[must_use]
    pub fn embedder(mut self, embedder: impl EmbeddingModel + 'static) -> Self {
        self.embedder = Some(Arc::new(embedder));
        self
    }

    /// Sets the control plane used to provision the index.
    #[must_use]
    pub fn control(mut self, control: impl IndexControl + 'static) -> Self {
        self.control = Some(Arc::new(control));
        self
    }

    /// Sets the data plane the records are written to.
    #[must_use]
    pub fn index(mut self, index: impl VectorIndex + 'static) -> Self {
        self.index = Some(Arc::new(index));
        self
    }

    /// Uses `store` for both the control plane and the data plane.
    #[must_use]
    pub fn store(self, store: impl IndexControl + VectorIndex + Clone + 'static) -> Self {
        self.control(store.clone()).index(store)
    }
}
