//! Fetches an MLQA parquet shard from the Hugging Face Hub, loads its
//! `context` column, and ingests it in caller-sized batches.
//!
//! Set `OPENAI_API_KEY`, `PINECONE_API_KEY`, and optionally `HF_TOKEN`
//! before running the example.
use std::path::Path;

use anyhow::Result;
use semidex::ingest::Ingester;
use semidex::integrations::huggingface::HfHub;
use semidex::integrations::{openai::OpenAI, parquet::Parquet, pinecone::Pinecone};
use semidex::{IndexDescriptor, IngestConfig};

const DATASETS_REPO: &str = "datasets/google/xtreme";
const SOURCE_PATH: &str = "MLQA.en.en/validation-00000-of-00001.parquet";
const DESTINATION: &str = "datasets/validation.parquet";

// Must match the embedding length of the model in use.
const DIMENSION: u64 = 3072;

// Keeps each request well under the embedding API's input limit.
const BATCH_SIZE: usize = 96;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    fs_err::create_dir_all("datasets")?;

    HfHub::builder()
        .build()?
        .download_to(DATASETS_REPO, SOURCE_PATH, Path::new(DESTINATION))
        .await?;

    let texts = Parquet::builder()
        .path(DESTINATION)
        .column_name("context")
        .build()?
        .load()
        .await?;

    println!("Loaded {} texts from {SOURCE_PATH}", texts.len());

    let descriptor = IndexDescriptor::builder()
        .name("semantic-search-test")
        .dimension(DIMENSION)
        .build()?;

    let ingester = Ingester::builder()
        .embedder(
            OpenAI::builder()
                .default_embed_model("text-embedding-3-large")
                .build()?,
        )
        .store(Pinecone::builder().index_name(&descriptor.name).build()?)
        .config(
            IngestConfig::builder()
                .descriptor(descriptor)
                .namespace("mlqa-en")
                .build()?,
        )
        .build()?;

    for batch in texts.chunks(BATCH_SIZE) {
        ingester.upsert_texts(batch.to_vec()).await?;
    }

    println!("Done!");

    Ok(())
}
