use crate::error::StorageError;
use async_trait::async_trait;
use quadstore_model::IndexKey;
use std::sync::Arc;

/// The indexing backend that persists [IndexKey]s.
///
/// Calls to [QuadBackend::index] must be serializable with respect to each other. The engine does
/// not require any ordering beyond the order in which it issues the calls for a single update.
#[async_trait]
pub trait QuadBackend: Send + Sync {
    /// Indexes the given `key`.
    ///
    /// Indexing a key that is already present is not an error.
    async fn index(&self, key: IndexKey) -> Result<(), StorageError>;
}

pub type QuadBackendRef = Arc<dyn QuadBackend>;
