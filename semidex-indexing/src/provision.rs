//! Ensures the target index exists before anything is written.

use std::sync::Arc;

use anyhow::Result;
use semidex_core::{ContractViolation, IndexControl, IndexDescriptor};

/// Idempotent index provisioning.
///
/// The only mutating control plane call, create, is guarded by the listing
/// check, so calling [`ensure_index`](Provisioner::ensure_index) on every
/// run is safe.
#[derive(Debug, Clone)]
pub struct Provisioner {
    control: Arc<dyn IndexControl>,
    descriptor: IndexDescriptor,
}

impl Provisioner {
    pub fn new(control: impl IndexControl + 'static, descriptor: IndexDescriptor) -> Self {
        Self::from_arc(Arc::new(control), descriptor)
    }

    pub fn from_arc(control: Arc<dyn IndexControl>, descriptor: IndexDescriptor) -> Self {
        Self {
            control,
            descriptor,
        }
    }

    /// Creates the target index unless one with the same name exists.
    ///
    /// # Errors
    ///
    /// Fails with [`ContractViolation::MissingIndexList`] when the control
    /// plane answers without a listing, with
    /// [`ContractViolation::DimensionMismatch`] when an existing index
    /// reports a dimension that conflicts with the descriptor, and
    /// propagates listing or create failures unchanged. No create is
    /// attempted in any of the failure cases.
    #[tracing::instrument(skip_all, fields(index = %self.descriptor.name), err)]
    pub async fn ensure_index(&self) -> Result<()> {
        let Some(indexes) = self.control.list_indexes().await? else {
            return Err(ContractViolation::MissingIndexList.into());
        };

        if let Some(existing) = indexes.iter().find(|i| i.name == self.descriptor.name) {
            if let Some(dimension) = existing.dimension {
                if dimension != self.descriptor.dimension {
                    return Err(ContractViolation::DimensionMismatch {
                        name: self.descriptor.name.clone(),
                        existing: dimension,
                        requested: self.descriptor.dimension,
                    }
                    .into());
                }
            }

            tracing::debug!(index = %self.descriptor.name, "Index exists, skipping create");
            return Ok(());
        }

        tracing::info!(
            index = %self.descriptor.name,
            dimension = self.descriptor.dimension,
            metric = %self.descriptor.metric,
            "Creating index"
        );
        self.control.create_index(&self.descriptor).await
    }
}
