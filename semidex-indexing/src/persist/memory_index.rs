use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::Result;
use async_trait::async_trait;
use semidex_core::{
    IndexControl, IndexDescriptor, IndexSummary, IndexedRecord, VectorIndex,
};
use tokio::sync::RwLock;

/// A simple in-memory implementation of both index planes.
///
/// Great for experimentation and testing. Records are keyed by id within a
/// namespace, so upserts behave like the real thing: insert when the id is
/// absent, replace when it is present.
///
/// Clones share the underlying storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryIndex {
    indexes: Arc<RwLock<Vec<IndexSummary>>>,
    namespaces: Arc<RwLock<HashMap<String, HashMap<String, IndexedRecord>>>>,
    create_calls: Arc<AtomicUsize>,
}

impl MemoryIndex {
    /// Number of create calls seen so far, for asserting idempotence.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::Relaxed)
    }

    /// Retrieve a record by namespace and id.
    pub async fn get(&self, namespace: &str, id: &str) -> Option<IndexedRecord> {
        self.namespaces
            .read()
            .await
            .get(namespace)
            .and_then(|records| records.get(id))
            .cloned()
    }

    /// All records currently stored in a namespace.
    pub async fn records_in(&self, namespace: &str) -> Vec<IndexedRecord> {
        self.namespaces
            .read()
            .await
            .get(namespace)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IndexControl for MemoryIndex {
    async fn list_indexes(&self) -> Result<Option<Vec<IndexSummary>>> {
        Ok(Some(self.indexes.read().await.clone()))
    }

    async fn create_index(&self, descriptor: &IndexDescriptor) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        self.indexes.write().await.push(IndexSummary {
            name: descriptor.name.clone(),
            dimension: Some(descriptor.dimension),
            metric: Some(descriptor.metric),
        });
        Ok(())
    }
}

#[async_trait]
impl VectorIndex for MemoryIndex {
    async fn upsert(&self, namespace: &str, records: Vec<IndexedRecord>) -> Result<()> {
        let mut lock = self.namespaces.write().await;
        let entries = lock.entry(namespace.to_string()).or_default();

        for record in records {
            entries.insert(record.id.clone(), record);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use semidex_core::fingerprint;

    fn record(text: &str, values: Vec<f32>, date_uploaded: i64) -> IndexedRecord {
        IndexedRecord::from_text(text, values, date_uploaded)
    }

    #[tokio::test]
    async fn upsert_inserts_then_replaces() {
        let index = MemoryIndex::default();

        index
            .upsert("default", vec![record("hello", vec![1.0], 1)])
            .await
            .unwrap();
        index
            .upsert("default", vec![record("hello", vec![2.0], 2)])
            .await
            .unwrap();

        let records = index.records_in("default").await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].values, vec![2.0]);
        assert_eq!(records[0].metadata.date_uploaded, 2);
    }

    #[tokio::test]
    async fn namespaces_are_isolated() {
        let index = MemoryIndex::default();

        index
            .upsert("first", vec![record("hello", vec![1.0], 1)])
            .await
            .unwrap();
        index
            .upsert("second", vec![record("hello", vec![1.0], 1)])
            .await
            .unwrap();

        assert_eq!(index.records_in("first").await.len(), 1);
        assert_eq!(index.records_in("second").await.len(), 1);
        assert!(index.get("third", &fingerprint("hello")).await.is_none());
    }

    #[tokio::test]
    async fn create_index_is_recorded_in_the_listing() {
        let index = MemoryIndex::default();
        let descriptor = IndexDescriptor::builder()
            .name("semantic-search-test")
            .dimension(8)
            .build()
            .unwrap();

        index.create_index(&descriptor).await.unwrap();

        let listing = index.list_indexes().await.unwrap().unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "semantic-search-test");
        assert_eq!(listing[0].dimension, Some(8));
        assert_eq!(index.create_calls(), 1);
    }
}
