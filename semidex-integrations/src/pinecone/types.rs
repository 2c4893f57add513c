//! Wire types for the Pinecone REST API.

use semidex_core::{IndexDescriptor, IndexSummary, IndexedRecord, Metric, ServerlessSpec};
use serde::{Deserialize, Serialize};

/// Response of the list indexes call.
///
/// `indexes` is optional on the wire. A response without it is not the same
/// thing as an empty account and is surfaced as such.
#[derive(Debug, Deserialize)]
pub(super) struct ListIndexesResponse {
    pub indexes: Option<Vec<IndexModel>>,
}

/// One index as the control plane describes it.
#[derive(Debug, Deserialize)]
pub(super) struct IndexModel {
    pub name: String,
    #[serde(default)]
    pub dimension: Option<u64>,
    #[serde(default)]
    pub metric: Option<Metric>,
    #[serde(default)]
    pub host: String,
}

impl From<IndexModel> for IndexSummary {
    fn from(index: IndexModel) -> Self {
        IndexSummary {
            name: index.name,
            dimension: index.dimension,
            metric: index.metric,
        }
    }
}

/// Body of the create index call.
#[derive(Debug, Serialize)]
pub(super) struct CreateIndexRequest<'a> {
    pub name: &'a str,
    pub dimension: u64,
    pub metric: Metric,
    pub spec: IndexSpec<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct IndexSpec<'a> {
    pub serverless: &'a ServerlessSpec,
}

impl<'a> From<&'a IndexDescriptor> for CreateIndexRequest<'a> {
    fn from(descriptor: &'a IndexDescriptor) -> Self {
        Self {
            name: &descriptor.name,
            dimension: descriptor.dimension,
            metric: descriptor.metric,
            spec: IndexSpec {
                serverless: &descriptor.serverless,
            },
        }
    }
}

/// Body of the upsert call.
#[derive(Debug, Serialize)]
pub(super) struct UpsertRequest<'a> {
    pub vectors: &'a [IndexedRecord],
    pub namespace: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpsertResponse {
    #[serde(rename = "upsertedCount", default)]
    pub upserted_count: u64,
}
