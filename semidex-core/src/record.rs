//! Records as they are written to the vector index.

use serde::{Deserialize, Serialize};

use crate::{Embedding, fingerprint};

/// Metadata stored alongside each vector in the index.
///
/// `date_uploaded` is a batch-level attribute: every record prepared in the
/// same batch carries the same upload timestamp (epoch milliseconds), which
/// keeps batch provenance queryable from the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub text: String,
    pub date_uploaded: i64,
}

/// A single upsertable unit: content fingerprint, embedding vector, and
/// metadata.
///
/// Constructed once per text per pipeline run and written with
/// insert-or-replace semantics on the id, never appended as a duplicate.
/// Serializes to the exact shape the index's upsert endpoint accepts.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedRecord {
    /// Content fingerprint of `metadata.text`, the primary key in the index.
    pub id: String,
    /// Embedding vector. Its length must equal the target index dimension.
    pub values: Embedding,
    pub metadata: RecordMetadata,
}

impl IndexedRecord {
    /// Assembles a record from raw text, deriving the id from the text.
    pub fn from_text(text: impl Into<String>, values: Embedding, date_uploaded: i64) -> Self {
        let text = text.into();
        Self {
            id: fingerprint(&text),
            values,
            metadata: RecordMetadata {
                text,
                date_uploaded,
            },
        }
    }
}

impl std::fmt::Debug for IndexedRecord {
    /// The vector is displayed as its length; the text is truncated.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.metadata.text.chars().take(100).collect();
        f.debug_struct("IndexedRecord")
            .field("id", &self.id)
            .field("values", &self.values.len())
            .field("text", &format!("{text} ({})", self.metadata.text.len()))
            .field("date_uploaded", &self.metadata.date_uploaded)
            .finish()
    }
}
