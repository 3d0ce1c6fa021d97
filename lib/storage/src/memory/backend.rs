use crate::index::{IndexComponents, IndexPermutations};
use crate::memory::quad_index::MemQuadIndex;
use async_trait::async_trait;
use quadstore_common::error::{CorruptionError, StorageError};
use quadstore_common::QuadBackend;
use quadstore_model::{IndexKey, ObjectId};
use std::collections::HashSet;
use tokio::sync::RwLock;

type MemIndexPermutations = IndexPermutations<MemQuadIndex, HashSet<ObjectId>>;

/// An in-memory [QuadBackend] that keeps every key in the GSPO, GPOS, and GOSP permutations.
///
/// The index is guarded by an async lock, which serializes [QuadBackend::index] calls.
#[derive(Debug)]
pub struct MemQuadBackend {
    indexes: RwLock<MemIndexPermutations>,
}

impl Default for MemQuadBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemQuadBackend {
    /// Creates a new empty [MemQuadBackend].
    pub fn new() -> Self {
        let indexes = vec![
            MemQuadIndex::new(IndexComponents::GSPO),
            MemQuadIndex::new(IndexComponents::GPOS),
            MemQuadIndex::new(IndexComponents::GOSP),
        ];
        Self {
            indexes: RwLock::new(IndexPermutations::new(HashSet::new(), indexes)),
        }
    }

    /// Returns the number of indexed keys.
    pub async fn len(&self) -> usize {
        self.indexes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.indexes.read().await.is_empty()
    }

    /// Returns true if `key` has been indexed.
    pub async fn contains(&self, key: &IndexKey) -> bool {
        self.indexes.read().await.contains(key)
    }

    /// Returns all indexed keys in GSPO order.
    pub async fn keys(&self) -> Vec<IndexKey> {
        self.indexes.read().await.keys()
    }

    /// Returns the ids of all graphs that hold at least one key, excluding the default graph.
    pub async fn named_graphs(&self) -> Vec<ObjectId> {
        self.indexes.read().await.named_graphs()
    }
}

#[async_trait]
impl QuadBackend for MemQuadBackend {
    async fn index(&self, key: IndexKey) -> Result<(), StorageError> {
        validate_key(&key)?;

        let inserted = self.indexes.write().await.insert(&key);
        if inserted {
            tracing::trace!(%key, "indexed key");
        } else {
            tracing::trace!(%key, "key already indexed");
        }
        Ok(())
    }
}

/// Only the graph position may hold the default graph id.
fn validate_key(key: &IndexKey) -> Result<(), CorruptionError> {
    let positions = [
        ("subject", key.subject),
        ("predicate", key.predicate),
        ("object", key.object),
    ];
    for (position, id) in positions {
        if id.is_default_graph() {
            return Err(CorruptionError::msg(format!(
                "The default graph id cannot be used as {position} of the key {key}"
            )));
        }
    }
    Ok(())
}
