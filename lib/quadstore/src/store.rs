//! API to access an in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
//!
//! Usage example:
//! ```
//! use quadstore::store::Store;
//!
//! # tokio_test::block_on(async {
//! let store = Store::new();
//! store.update("INSERT DATA { <http://example.com/s> <http://example.com/p> \"o\" }").await?;
//! assert_eq!(store.len().await, 1);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! # }).unwrap();
//! ```

use quadstore_engine::parser::SparqlParser;
use quadstore_engine::{
    CancellationToken, CanonicalizerOptions, EngineOptions, ExecutionError, ParseError,
    QueryEngine, UpdateSummary,
};
use quadstore_model::IndexKey;
use quadstore_storage::memory::{MemLexicon, MemQuadBackend};
use std::sync::Arc;

/// An RDF quad store that is backed by a [MemLexicon] and a [MemQuadBackend].
///
/// The store can be updated using `INSERT DATA` requests. Other update operations and retrieval
/// queries are rejected.
///
/// Usage example:
/// ```
/// use quadstore::store::Store;
///
/// # tokio_test::block_on(async {
/// let store = Store::new();
///
/// let summary = store.update(r#"
///     PREFIX ex: <http://example.com/>
///     INSERT DATA { ex:paris ex:name "Paris"@fr . GRAPH ex:g { ex:paris a ex:City } }
/// "#).await?;
/// assert_eq!(summary.quads, 2);
///
/// let paris = store.lexicon().try_get_uri("http://example.com/paris");
/// assert!(paris.is_some());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// # }).unwrap();
/// ```
#[derive(Clone)]
pub struct Store {
    engine: Arc<QueryEngine>,
    lexicon: Arc<MemLexicon>,
    backend: Arc<MemQuadBackend>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty [Store] with the default options.
    pub fn new() -> Self {
        let lexicon = Arc::new(MemLexicon::new());
        let backend = Arc::new(MemQuadBackend::new());
        let shared_lexicon = Arc::clone(&lexicon);
        let shared_backend = Arc::clone(&backend);
        let engine = QueryEngine::new(
            SparqlParser::default(),
            shared_lexicon,
            shared_backend,
            CanonicalizerOptions::default(),
        );
        Self {
            engine: Arc::new(engine),
            lexicon,
            backend,
        }
    }

    /// Creates an empty [Store] with the given `options`.
    ///
    /// Fails if the parser options contain an invalid IRI.
    pub fn with_options(options: EngineOptions) -> Result<Self, ParseError> {
        let lexicon = Arc::new(MemLexicon::new());
        let backend = Arc::new(MemQuadBackend::new());
        let shared_lexicon = Arc::clone(&lexicon);
        let shared_backend = Arc::clone(&backend);
        let engine = QueryEngine::try_new(shared_lexicon, shared_backend, options)?;
        Ok(Self {
            engine: Arc::new(engine),
            lexicon,
            backend,
        })
    }

    /// Returns the lexicon that maps terms to object ids.
    pub fn lexicon(&self) -> &MemLexicon {
        &self.lexicon
    }

    /// Returns the backend that holds the index keys.
    pub fn backend(&self) -> &MemQuadBackend {
        &self.backend
    }

    /// Executes a [SPARQL 1.1 update](https://www.w3.org/TR/sparql11-update/).
    ///
    /// If the update fails, the quads that precede the failing quad remain in the store.
    pub async fn update(&self, update: &str) -> Result<UpdateSummary, ExecutionError> {
        self.update_with_cancellation(update, &CancellationToken::new())
            .await
    }

    /// Executes a [SPARQL 1.1 update](https://www.w3.org/TR/sparql11-update/) that can be
    /// cancelled with `cancellation`.
    pub async fn update_with_cancellation(
        &self,
        update: &str,
        cancellation: &CancellationToken,
    ) -> Result<UpdateSummary, ExecutionError> {
        let summary = self.engine.update(update, cancellation).await?;
        tracing::debug!(quads = summary.quads, "applied update to store");
        Ok(summary)
    }

    /// Returns the number of quads in the store.
    pub async fn len(&self) -> usize {
        self.backend.len().await
    }

    /// Returns true if the store contains no quads.
    pub async fn is_empty(&self) -> bool {
        self.backend.is_empty().await
    }

    /// Returns true if the store contains `key`.
    pub async fn contains(&self, key: &IndexKey) -> bool {
        self.backend.contains(key).await
    }
}
