//! # semidex
//!
//! Batch ingestion for semantic search. semidex embeds raw text with a
//! remote model and upserts the vectors into a serverless vector index,
//! keyed by a content fingerprint so that re-running an ingest overwrites
//! records instead of duplicating them.
//!
//! A run is a strict sequence: provision the index (create once, recognize
//! afterwards), embed the batch in a single remote call, write all records
//! to one namespace as a single logical batch. Any failure aborts the run;
//! re-running is always safe.
//!
//! ## Ingesting text
//!
//! ```no_run
//! # use anyhow::Result;
//! use semidex::ingest::Ingester;
//! use semidex::integrations::{openai::OpenAI, pinecone::Pinecone};
//! use semidex::{IndexDescriptor, IngestConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let descriptor = IndexDescriptor::builder()
//!     .name("semantic-search-test")
//!     .dimension(3072)
//!     .build()?;
//!
//! let ingester = Ingester::builder()
//!     .embedder(
//!         OpenAI::builder()
//!             .default_embed_model("text-embedding-3-large")
//!             .build()?,
//!     )
//!     .store(Pinecone::builder().index_name(&descriptor.name).build()?)
//!     .config(IngestConfig::builder().descriptor(descriptor).build()?)
//!     .build()?;
//!
//! ingester.upsert_texts(vec!["Hello, world!".into()]).await
//! # }
//! ```
//!
//! ## Bring your own collaborators
//!
//! Every remote system sits behind a trait in [`traits`]: implement
//! [`traits::EmbeddingModel`], [`traits::IndexControl`], or
//! [`traits::VectorIndex`] to swap in another provider, or use
//! [`ingest::MemoryIndex`] to experiment without any remote index at all.
//!
//! `tracing` is used for logging throughout; install a subscriber to see
//! what a run is doing. See `examples/` for runnable end-to-end programs.

#[doc(inline)]
pub use semidex_core::{
    Cloud, ContractViolation, DEFAULT_NAMESPACE, Embedding, Embeddings, IndexDescriptor,
    IndexSummary, IndexedRecord, IngestConfig, Metric, RecordMetadata, ServerlessSpec, fingerprint,
};

/// Traits for bringing your own embedder, index, or dataset source.
pub mod traits {
    pub use semidex_core::traits::*;
}

/// The ingestion pipeline and local index implementations.
pub mod ingest {
    pub use semidex_indexing::persist::MemoryIndex;
    pub use semidex_indexing::{Ingester, IngesterBuilder, Preparer, Provisioner};
}

/// Integrations with remote services.
pub mod integrations {
    pub use semidex_integrations::{huggingface, openai, parquet, pinecone};
}
