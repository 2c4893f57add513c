//! Load text columns from parquet files.

use std::path::PathBuf;

use derive_builder::Builder;

mod loader;

/// Reads a single string column from a parquet file.
///
/// Provide a path, a column name, and an optional batch size. The column
/// must be of type `StringArray`; every value becomes one raw text record
/// for the pipeline.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into, strip_option))]
pub struct Parquet {
    path: PathBuf,
    column_name: String,
    #[builder(default = "1024")]
    batch_size: usize,
}

impl Parquet {
    pub fn builder() -> ParquetBuilder {
        ParquetBuilder::default()
    }
}
