use anyhow::{Context as _, Result};
use arrow_array::StringArray;
use fs_err::tokio::File;
use futures_util::StreamExt as _;
use parquet::arrow::{ParquetRecordBatchStreamBuilder, ProjectionMask};

use super::Parquet;

impl Parquet {
    /// Loads every value of the configured column, in file order.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or is not valid parquet, when
    /// the column does not exist, or when the column is not a string
    /// column.
    #[tracing::instrument(skip_all, fields(path = %self.path.display(), column = %self.column_name), err)]
    pub async fn load(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).await?;

        let mut builder = ParquetRecordBatchStreamBuilder::new(file)
            .await
            .context("Failed to open parquet file")?
            .with_batch_size(self.batch_size);

        let file_metadata = builder.metadata().file_metadata().clone();
        let column_idx = file_metadata
            .schema()
            .get_fields()
            .iter()
            .position(|column| column.name() == self.column_name)
            .with_context(|| format!("Column {} not found in dataset", &self.column_name))?;

        let mask = ProjectionMask::roots(file_metadata.schema_descr(), [column_idx]);
        builder = builder.with_projection(mask);

        let mut stream = builder.build().context("Failed to build parquet reader")?;

        let mut texts = Vec::new();
        while let Some(batch) = stream.next().await {
            let batch = batch?;
            let column = batch
                .column(0) // Only the projected column is left at this point
                .as_any()
                .downcast_ref::<StringArray>()
                .with_context(|| {
                    format!("Column {} is not a string column", &self.column_name)
                })?;

            texts.extend(column.iter().flatten().map(ToString::to_string));
        }

        tracing::debug!(num_texts = texts.len(), "Loaded column values");

        Ok(texts)
    }
}
