//! Trait seams between the pipeline and its external collaborators.
//!
//! Every remote system the pipeline talks to sits behind one of these
//! traits so it can be swapped or mocked independently. The pipeline in
//! `semidex-indexing` is written purely against them.

use std::fmt::Debug;

use anyhow::Result;
use async_trait::async_trait;

#[cfg(feature = "test-utils")]
#[doc(hidden)]
use mockall::automock;

use crate::{Embeddings, IndexDescriptor, IndexSummary, IndexedRecord};

#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
/// Embeds a list of strings and returns its embeddings.
///
/// One invocation issues exactly one remote call carrying the whole batch.
/// The result is order-preserving and strictly 1:1 with the input; sizing
/// batches for the remote model's request limits is the caller's job.
pub trait EmbeddingModel: Send + Sync + Debug {
    async fn embed(&self, input: Vec<String>) -> Result<Embeddings>;
}

#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
/// Control plane of the vector index provider.
pub trait IndexControl: Send + Sync + Debug {
    /// Lists the indexes that currently exist.
    ///
    /// `Ok(None)` means the control plane answered without a listing.
    /// Callers must treat that as a failure, not as an empty account.
    async fn list_indexes(&self) -> Result<Option<Vec<IndexSummary>>>;

    /// Creates the index described by `descriptor`.
    async fn create_index(&self, descriptor: &IndexDescriptor) -> Result<()>;
}

#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
/// Data plane write access to a vector index.
pub trait VectorIndex: Send + Sync + Debug {
    /// Writes `records` into `namespace` as one logical batch, with
    /// insert-or-replace semantics on the record id.
    async fn upsert(&self, namespace: &str, records: Vec<IndexedRecord>) -> Result<()>;
}

#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
/// Retrieves raw corpus files from a remote dataset repository.
pub trait DatasetFetcher: Send + Sync + Debug {
    /// Downloads `source_path` from `repo`, returning the complete payload
    /// or failing. Partial delivery is not part of the contract.
    async fn download(&self, repo: &str, source_path: &str) -> Result<Vec<u8>>;
}
