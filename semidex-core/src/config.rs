//! Run configuration for the ingestion pipeline.
//!
//! Configuration is an explicit, immutable value handed to components at
//! construction time; nothing in the pipeline reads ambient globals. The
//! embedding model id is configured on the embedding client itself, in the
//! same spirit.

use derive_builder::Builder;

use crate::IndexDescriptor;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Immutable configuration for one ingestion run.
#[derive(Clone, Debug, Builder)]
#[builder(build_fn(error = "anyhow::Error"))]
pub struct IngestConfig {
    /// The target index. Created on the first run, recognized afterwards.
    pub descriptor: IndexDescriptor,
    /// Namespace all records of a run are written to.
    #[builder(setter(into), default = "DEFAULT_NAMESPACE.to_string()")]
    pub namespace: String,
}

impl IngestConfig {
    pub fn builder() -> IngestConfigBuilder {
        IngestConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> IndexDescriptor {
        IndexDescriptor::builder()
            .name("semantic-search-test")
            .dimension(8)
            .build()
            .unwrap()
    }

    #[test]
    fn namespace_defaults() {
        let config = IngestConfig::builder()
            .descriptor(descriptor())
            .build()
            .unwrap();

        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn namespace_can_be_overridden() {
        let config = IngestConfig::builder()
            .descriptor(descriptor())
            .namespace("mlqa-en")
            .build()
            .unwrap();

        assert_eq!(config.namespace, "mlqa-en");
    }
}
