//! Embeds a single text and upserts it into a serverless Pinecone index,
//! creating the index on the first run.
//!
//! Set the `OPENAI_API_KEY` and `PINECONE_API_KEY` environment variables
//! before running the example.
use anyhow::Result;
use semidex::ingest::Ingester;
use semidex::integrations::{openai::OpenAI, pinecone::Pinecone};
use semidex::{IndexDescriptor, IngestConfig};

// Must match the embedding length of the model in use.
const DIMENSION: u64 = 3072;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let descriptor = IndexDescriptor::builder()
        .name("semantic-search-test")
        .dimension(DIMENSION)
        .build()?;

    let openai = OpenAI::builder()
        .default_embed_model("text-embedding-3-large")
        .build()?;

    let pinecone = Pinecone::builder()
        .index_name(&descriptor.name)
        .build()?;

    let ingester = Ingester::builder()
        .embedder(openai)
        .store(pinecone)
        .config(IngestConfig::builder().descriptor(descriptor).build()?)
        .build()?;

    ingester.upsert_texts(vec!["Hello, world!".into()]).await?;

    println!("Done!");

    Ok(())
}
