//! End-to-end tests of the ingestion pipeline against mocked remote
//! services: the embedding endpoint and both Pinecone planes are wiremock
//! servers, everything in between is the real pipeline.

use semidex::ingest::Ingester;
use semidex::{IndexDescriptor, IngestConfig, fingerprint};
use semidex_test_utils::{
    mock_create_index, mock_embeddings, mock_index_listing, mock_upsert, openai_client,
    pinecone_client,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_NAME: &str = "semantic-search-test";
const DIMENSION: u64 = 3;

fn ingester(mock_server: &MockServer) -> Ingester {
    Ingester::builder()
        .embedder(openai_client(
            &mock_server.uri(),
            "text-embedding-3-small",
        ))
        .store(pinecone_client(&mock_server.uri(), INDEX_NAME))
        .config(
            IngestConfig::builder()
                .descriptor(
                    IndexDescriptor::builder()
                        .name(INDEX_NAME)
                        .dimension(DIMENSION)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[test_log::test(tokio::test)]
async fn test_ingests_hello_world_end_to_end() {
    let mock_server = MockServer::start().await;

    mock_embeddings(&mock_server, 1, DIMENSION as usize).await;
    mock_index_listing(&mock_server, &[], DIMENSION).await;
    mock_create_index(&mock_server, INDEX_NAME, DIMENSION).await;
    mock_upsert(&mock_server, 1).await;

    ingester(&mock_server)
        .upsert_texts(vec!["Hello, world!".into()])
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();

    let creates = requests
        .iter()
        .filter(|r| r.method == "POST" && r.url.path() == "/indexes")
        .count();
    assert_eq!(creates, 1, "the absent index is created exactly once");

    let upsert = requests
        .iter()
        .find(|r| r.url.path() == "/vectors/upsert")
        .expect("one upsert request");
    let body: serde_json::Value = serde_json::from_slice(&upsert.body).unwrap();

    assert_eq!(body["namespace"], "default");

    let vectors = body["vectors"].as_array().unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0]["id"], fingerprint("Hello, world!"));
    assert_eq!(vectors[0]["id"], "6cd3556deb0da54bca060b4c39479839");
    assert_eq!(
        vectors[0]["values"].as_array().unwrap().len(),
        DIMENSION as usize
    );
    assert_eq!(vectors[0]["metadata"]["text"], "Hello, world!");
    assert!(vectors[0]["metadata"]["dateUploaded"].is_i64());
}

#[test_log::test(tokio::test)]
async fn test_existing_index_is_not_recreated() {
    let mock_server = MockServer::start().await;

    mock_embeddings(&mock_server, 1, DIMENSION as usize).await;
    mock_index_listing(&mock_server, &[INDEX_NAME], DIMENSION).await;
    mock_upsert(&mock_server, 1).await;

    ingester(&mock_server)
        .upsert_texts(vec!["Hello, world!".into()])
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let creates = requests
        .iter()
        .filter(|r| r.method == "POST" && r.url.path() == "/indexes")
        .count();
    assert_eq!(creates, 0, "an existing index is left untouched");
}

#[test_log::test(tokio::test)]
async fn test_missing_index_listing_aborts_the_run() {
    let mock_server = MockServer::start().await;

    mock_embeddings(&mock_server, 1, DIMENSION as usize).await;
    mock_upsert(&mock_server, 1).await;

    // A control plane response without the listing itself.
    Mock::given(method("GET"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let err = ingester(&mock_server)
        .upsert_texts(vec!["Hello, world!".into()])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "index listing missing from control plane response"
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert!(
        requests.iter().all(|r| r.method == "GET"),
        "no create, embed, or write is attempted"
    );
}
