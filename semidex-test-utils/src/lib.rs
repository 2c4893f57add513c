//! Shared helpers for testing semidex against mocked remote services.
#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use semidex_integrations as integrations;

/// An `OpenAI` client pointed at a mock server.
pub fn openai_client(mock_server_uri: &str, embed_model: &str) -> integrations::openai::OpenAI {
    let config = async_openai::config::OpenAIConfig::new().with_api_base(mock_server_uri);
    let async_openai = async_openai::Client::with_config(config);

    integrations::openai::OpenAI::builder()
        .client(async_openai)
        .default_embed_model(embed_model)
        .build()
        .expect("Can create OpenAI client.")
}

/// A `Pinecone` client pointed at a mock server for both planes.
pub fn pinecone_client(mock_server_uri: &str, index_name: &str) -> integrations::pinecone::Pinecone {
    integrations::pinecone::Pinecone::builder()
        .api_base(mock_server_uri)
        .api_key("test-key")
        .index_name(index_name)
        .index_host(mock_server_uri)
        .build()
        .expect("Can create Pinecone client.")
}

/// Mock the embeddings creation endpoint.
/// `embeddings_count` controls the number of returned embedding vectors;
/// `dimension` the length of each vector.
pub async fn mock_embeddings(mock_server: &MockServer, embeddings_count: u8, dimension: usize) {
    let data = (0..embeddings_count)
        .map(|i| {
            json!({
              "object": "embedding",
              "embedding": vec![0.1; dimension],
              "index": i
            })
        })
        .collect::<Vec<serde_json::Value>>();

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "object": "list",
          "data": data,
          "model": "text-embedding-3-small",
          "usage": {
            "prompt_tokens": 8,
            "total_tokens": 8
          }
        })))
        .mount(mock_server)
        .await;
}

/// Mock the control plane listing with the given index names.
///
/// Pass an empty slice for an account without indexes; the listing is
/// present either way.
pub async fn mock_index_listing(mock_server: &MockServer, names: &[&str], dimension: u64) {
    let indexes = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "dimension": dimension,
                "metric": "cosine",
                "host": mock_server.uri(),
            })
        })
        .collect::<Vec<serde_json::Value>>();

    Mock::given(method("GET"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"indexes": indexes})))
        .mount(mock_server)
        .await;
}

/// Mock a successful index creation.
pub async fn mock_create_index(mock_server: &MockServer, name: &str, dimension: u64) {
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": name,
            "dimension": dimension,
            "metric": "cosine",
            "host": mock_server.uri(),
        })))
        .mount(mock_server)
        .await;
}

/// Mock a successful upsert of `count` records.
pub async fn mock_upsert(mock_server: &MockServer, count: u64) {
    Mock::given(method("POST"))
        .and(path("/vectors/upsert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"upsertedCount": count})))
        .mount(mock_server)
        .await;
}
