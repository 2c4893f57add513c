//! Descriptors for the target vector index.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Similarity metric of an index.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    #[default]
    Cosine,
    Euclidean,
    Dotproduct,
}

/// Cloud provider hosting a serverless index.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cloud {
    #[default]
    Aws,
    Gcp,
    Azure,
}

/// Placement of a managed, auto-scaling index deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerlessSpec {
    pub cloud: Cloud,
    pub region: String,
}

impl Default for ServerlessSpec {
    fn default() -> Self {
        Self {
            cloud: Cloud::Aws,
            region: "us-east-1".to_string(),
        }
    }
}

/// Everything needed to create, or recognize, the target index.
///
/// The dimension must equal the length of the vectors the embedding model
/// produces; the index will reject mismatched vectors at write time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "anyhow::Error"))]
pub struct IndexDescriptor {
    #[builder(setter(into))]
    pub name: String,
    pub dimension: u64,
    #[builder(default)]
    pub metric: Metric,
    #[builder(default)]
    pub serverless: ServerlessSpec,
}

impl IndexDescriptor {
    pub fn builder() -> IndexDescriptorBuilder {
        IndexDescriptorBuilder::default()
    }
}

/// One entry of the control plane's index listing.
///
/// Older control planes may omit the dimension or metric of an index, so
/// both are optional here; only the name is guaranteed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub name: String,
    #[serde(default)]
    pub dimension: Option<u64>,
    #[serde(default)]
    pub metric: Option<Metric>,
}
