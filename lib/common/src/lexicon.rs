use async_trait::async_trait;
use quadstore_model::ObjectId;
use std::sync::Arc;

/// The term dictionary that maps canonical term strings to [ObjectId]s.
///
/// # Contract
///
/// Registering a string is total: the lexicon creates a new entry if the string has not been seen
/// before. Registering is idempotent, i.e., the same string always yields the same [ObjectId] for
/// the lifetime of the store. URIs and literals are registered separately, so the URI `abc` and
/// the literal `abc` may map to different ids.
///
/// Implementations must be safe to call concurrently. The engine normalizes the terms of a quad
/// in parallel.
///
/// No implementation may hand out [quadstore_model::DEFAULT_GRAPH_ID].
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Returns the [ObjectId] of the URI `value`, registering it if necessary.
    async fn register_uri(&self, value: &str) -> ObjectId;

    /// Returns the [ObjectId] of the canonical literal string `value`, registering it if
    /// necessary.
    async fn register_literal(&self, value: &str) -> ObjectId;
}

pub type LexiconRef = Arc<dyn Lexicon>;
