//! Data plane writes: upserting records into the target index.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use reqwest::Method;
use semidex_core::{IndexedRecord, VectorIndex};

use super::Pinecone;
use super::types::{UpsertRequest, UpsertResponse};

#[async_trait]
impl VectorIndex for Pinecone {
    /// Writes the batch in one call. Id collisions overwrite on the server
    /// side, so re-running an ingest never duplicates records.
    #[tracing::instrument(skip_all, fields(index = %self.index_name, namespace, num_records = records.len()), err)]
    async fn upsert(&self, namespace: &str, records: Vec<IndexedRecord>) -> Result<()> {
        let url = format!("{}/vectors/upsert", self.data_plane_url().await?);

        let response: UpsertResponse = self
            .request(Method::POST, &url)
            .json(&UpsertRequest {
                vectors: &records,
                namespace,
            })
            .send()
            .await?
            .error_for_status()
            .context("Upsert rejected")?
            .json()
            .await
            .context("Failed to decode upsert response")?;

        tracing::debug!(upserted = response.upserted_count, "Upserted records");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semidex_core::fingerprint;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, Request, Respond, ResponseTemplate,
        matchers::{method, path},
    };

    fn records() -> Vec<IndexedRecord> {
        vec![IndexedRecord::from_text(
            "Hello, world!",
            vec![0.1, 0.2],
            1_700_000_000_000,
        )]
    }

    struct ValidateUpsertRequest;

    impl Respond for ValidateUpsertRequest {
        fn respond(&self, request: &Request) -> ResponseTemplate {
            assert_eq!(request.headers.get("Api-Key").unwrap(), "test-key");

            let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body["namespace"], "default");
            assert_eq!(body["vectors"].as_array().unwrap().len(), 1);
            assert_eq!(body["vectors"][0]["id"], fingerprint("Hello, world!"));
            assert_eq!(body["vectors"][0]["metadata"]["text"], "Hello, world!");

            ResponseTemplate::new(200).set_body_json(json!({"upsertedCount": 1}))
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_upsert_with_pinned_host() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/vectors/upsert"))
            .respond_with(ValidateUpsertRequest)
            .expect(1)
            .mount(&mock_server)
            .await;

        let pinecone = Pinecone::builder()
            .api_key("test-key")
            .index_name("semantic-search-test")
            .index_host(mock_server.uri())
            .build()
            .unwrap();

        pinecone.upsert("default", records()).await.unwrap();
    }

    #[test_log::test(tokio::test)]
    async fn test_upsert_resolves_host_through_control_plane() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/indexes/semantic-search-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "semantic-search-test",
                "dimension": 2,
                "metric": "cosine",
                "host": mock_server.uri(),
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/vectors/upsert"))
            .respond_with(ValidateUpsertRequest)
            .expect(1)
            .mount(&mock_server)
            .await;

        let pinecone = Pinecone::builder()
            .api_base(mock_server.uri())
            .api_key("test-key")
            .index_name("semantic-search-test")
            .build()
            .unwrap();

        pinecone.upsert("default", records()).await.unwrap();
    }

    #[test_log::test(tokio::test)]
    async fn test_upsert_surfaces_write_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/vectors/upsert"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let pinecone = Pinecone::builder()
            .api_key("test-key")
            .index_name("semantic-search-test")
            .index_host(mock_server.uri())
            .build()
            .unwrap();

        let err = pinecone.upsert("default", records()).await.unwrap_err();
        assert!(err.to_string().contains("Upsert rejected"));
    }
}
