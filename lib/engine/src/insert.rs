use crate::cancellation::CancellationToken;
use crate::error::QuadPosition;
use crate::namespace::NamespaceEnvironment;
use crate::normalize::TermNormalizer;
use crate::{InsertionError, NormalizationError};
use quadstore_common::QuadBackendRef;
use quadstore_model::{IndexKey, ObjectId, Quad, DEFAULT_GRAPH_ID};

/// Normalizes the terms of a quad and indexes the resulting key in the backend.
#[derive(Clone)]
pub struct QuadInserter {
    normalizer: TermNormalizer,
    backend: QuadBackendRef,
}

impl QuadInserter {
    /// Creates a new [QuadInserter].
    pub fn new(normalizer: TermNormalizer, backend: QuadBackendRef) -> Self {
        Self {
            normalizer,
            backend,
        }
    }

    /// Inserts `quad` and returns the key that has been indexed.
    ///
    /// The four terms are normalized concurrently. If more than one of them fails, the error of
    /// the first failing position in the order graph, subject, predicate, object is returned.
    /// A quad without a graph is placed in the default graph without consulting the lexicon.
    pub async fn insert_quad(
        &self,
        quad: &Quad,
        env: &NamespaceEnvironment,
        cancellation: &CancellationToken,
    ) -> Result<IndexKey, InsertionError> {
        let (graph, subject, predicate, object) = futures::join!(
            self.normalize_graph(quad, env, cancellation),
            self.normalizer.normalize(&quad.subject, env, cancellation),
            self.normalizer.normalize(&quad.predicate, env, cancellation),
            self.normalizer.normalize(&quad.object, env, cancellation),
        );

        let graph = graph.map_err(|e| InsertionError::normalization(QuadPosition::Graph, e))?;
        let subject =
            subject.map_err(|e| InsertionError::normalization(QuadPosition::Subject, e))?;
        let predicate =
            predicate.map_err(|e| InsertionError::normalization(QuadPosition::Predicate, e))?;
        let object = object.map_err(|e| InsertionError::normalization(QuadPosition::Object, e))?;

        let key = IndexKey::new(subject, predicate, object, graph);
        if cancellation.is_cancelled() {
            return Err(InsertionError::Cancelled);
        }
        tracing::trace!(%quad, %key, "indexing quad");
        self.backend.index(key).await?;
        Ok(key)
    }

    async fn normalize_graph(
        &self,
        quad: &Quad,
        env: &NamespaceEnvironment,
        cancellation: &CancellationToken,
    ) -> Result<ObjectId, NormalizationError> {
        match &quad.graph {
            None => Ok(DEFAULT_GRAPH_ID),
            Some(graph) => self.normalizer.normalize(graph, env, cancellation).await,
        }
    }
}
