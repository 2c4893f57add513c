use thiserror::Error;

/// Invariant breaks that must abort a run.
///
/// These are contract violations between the pipeline and its
/// collaborators, distinct from ordinary remote failures: retrying cannot
/// fix them, and continuing would corrupt the index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The embedding call returned a different number of vectors than it
    /// was given texts. Accepting partial results would break the
    /// positional 1:1 alignment between texts and vectors.
    #[error("embedding count mismatch: expected {expected}, got {got}")]
    EmbeddingCountMismatch { expected: usize, got: usize },

    /// The control plane answered without an index listing. Treating this
    /// as "no indexes exist" would trigger a spurious create.
    #[error("index listing missing from control plane response")]
    MissingIndexList,

    /// An index with the requested name already exists with a different
    /// dimension. Reusing it would make every subsequent write fail.
    #[error("index {name:?} exists with dimension {existing}, requested {requested}")]
    DimensionMismatch {
        name: String,
        existing: u64,
        requested: u64,
    },
}
