use crate::cancellation::CancellationToken;
use crate::insert::QuadInserter;
use crate::normalize::{LiteralCanonicalizer, TermNormalizer};
use crate::options::{CanonicalizerOptions, EngineOptions};
use crate::parser::{QueryParser, SparqlParser};
use crate::update::{UpdateExecutor, UpdateSummary};
use crate::{ExecutionError, ParseError};
use quadstore_common::{LexiconRef, QuadBackendRef};
use quadstore_model::{SyntaxKind, SyntaxToken};

/// The entry point for executing requests against a lexicon and a quad backend.
///
/// A [QueryEngine] consists of:
/// - A [QueryParser] that turns the request text into a syntax tree.
/// - A [QuadInserter] that resolves quads into object ids and indexes them in the backend.
///
/// Only update requests are executed. Retrieval queries are recognized but fail with
/// [ExecutionError::NotImplemented].
pub struct QueryEngine<TParser: QueryParser = SparqlParser> {
    parser: TParser,
    inserter: QuadInserter,
}

impl QueryEngine<SparqlParser> {
    /// Creates a new [QueryEngine] with the default SPARQL parser.
    pub fn try_new(
        lexicon: LexiconRef,
        backend: QuadBackendRef,
        options: EngineOptions,
    ) -> Result<Self, ParseError> {
        let parser = SparqlParser::try_new(options.parser)?;
        Ok(Self::new(parser, lexicon, backend, options.canonicalizer))
    }
}

impl<TParser: QueryParser> QueryEngine<TParser> {
    /// Creates a new [QueryEngine] that parses requests with `parser`.
    pub fn new(
        parser: TParser,
        lexicon: LexiconRef,
        backend: QuadBackendRef,
        options: CanonicalizerOptions,
    ) -> Self {
        let normalizer = TermNormalizer::new(lexicon, LiteralCanonicalizer::new(options));
        Self {
            parser,
            inserter: QuadInserter::new(normalizer, backend),
        }
    }

    /// Executes `query`.
    ///
    /// A failed update may have been partially applied.
    pub async fn execute(&self, query: &str) -> Result<(), ExecutionError> {
        self.execute_with_cancellation(query, &CancellationToken::new())
            .await
    }

    /// Executes `query` and stops at the next lexicon or backend call once `cancellation` is
    /// cancelled.
    pub async fn execute_with_cancellation(
        &self,
        query: &str,
        cancellation: &CancellationToken,
    ) -> Result<(), ExecutionError> {
        self.update(query, cancellation).await.map(|_| ())
    }

    /// Executes `query` and returns the statistics of the update.
    #[tracing::instrument(name = "execute", skip_all, fields(query_len = query.len()))]
    pub async fn update(
        &self,
        query: &str,
        cancellation: &CancellationToken,
    ) -> Result<UpdateSummary, ExecutionError> {
        let tree = self.parser.parse_query_string(query).await?;

        match (&tree.token, &tree.kind) {
            (SyntaxToken::Query, SyntaxKind::Update) => {
                tracing::debug!(units = tree.units.len(), "executing update");
                let summary = UpdateExecutor::new(&self.parser, &self.inserter)
                    .execute_update(&tree, cancellation)
                    .await?;
                tracing::debug!(units = summary.units, quads = summary.quads, "update finished");
                Ok(summary)
            }
            (SyntaxToken::Query, SyntaxKind::Query) => {
                tracing::debug!("rejecting retrieval query");
                Err(ExecutionError::NotImplemented(
                    "Execution of retrieval queries".to_owned(),
                ))
            }
            (token, kind) => Err(ExecutionError::UnsupportedSyntax {
                token: token.clone(),
                kind: kind.clone(),
            }),
        }
    }
}
