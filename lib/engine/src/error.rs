use oxrdf::IriParseError;
use quadstore_common::error::StorageError;
use quadstore_model::{SyntaxKind, SyntaxToken};
use spargebra::SparqlSyntaxError;
use std::fmt::{Display, Formatter};

/// An error raised while turning a single term into an object id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NormalizationError {
    /// The term refers to a namespace prefix that has not been declared.
    #[error("The prefix {0} cannot be resolved in the current environment")]
    UnresolvedPrefix(String),
    /// The term is of a kind that cannot be stored in the lexicon.
    #[error("Token of kind {0} cannot be normalized")]
    UnsupportedTermKind(String),
    #[error("The operation has been cancelled")]
    Cancelled,
}

/// Identifies a position within a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuadPosition {
    Graph,
    Subject,
    Predicate,
    Object,
}

impl Display for QuadPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadPosition::Graph => f.write_str("graph"),
            QuadPosition::Subject => f.write_str("subject"),
            QuadPosition::Predicate => f.write_str("predicate"),
            QuadPosition::Object => f.write_str("object"),
        }
    }
}

/// An error raised while inserting a single quad.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InsertionError {
    /// A term of the quad could not be normalized.
    #[error("Cannot normalize the {position} of the quad: {source}")]
    Normalization {
        /// The position of the failing term.
        position: QuadPosition,
        #[source]
        source: NormalizationError,
    },
    /// The backend rejected the index key.
    #[error(transparent)]
    Backend(#[from] StorageError),
    #[error("The operation has been cancelled")]
    Cancelled,
}

impl InsertionError {
    /// Attaches the `position` to a [NormalizationError]. Cancellation is not tied to a position.
    pub fn normalization(position: QuadPosition, source: NormalizationError) -> Self {
        match source {
            NormalizationError::Cancelled => Self::Cancelled,
            source => Self::Normalization { position, source },
        }
    }
}

/// An error raised by the parser collaborator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The query text is not valid SPARQL.
    #[error(transparent)]
    Syntax(#[from] SparqlSyntaxError),
    /// The configured base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// A configured prefix declaration is invalid.
    #[error("Invalid namespace '{iri}' for prefix '{prefix}': {error}")]
    InvalidPrefix {
        prefix: String,
        iri: String,
        #[source]
        error: IriParseError,
    },
    /// The parsed request contains a term that has no syntax tree representation.
    #[error("The term {0} is not supported in update data")]
    UnsupportedTerm(String),
}

/// An error raised while executing a request.
///
/// A failed update may have been partially applied: quads that were indexed before the failing
/// quad are not rolled back.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutionError {
    /// The request could not be parsed. Nothing has been executed.
    #[error(transparent)]
    Parsing(#[from] ParseError),
    #[error("A feature has not yet been implemented: {0}")]
    NotImplemented(String),
    /// The parser produced a syntax tree that is neither an update nor a query.
    #[error("Unsupported syntax tree with token '{token}' and kind '{kind}'")]
    UnsupportedSyntax {
        token: SyntaxToken,
        kind: SyntaxKind,
    },
    /// The update contains a unit other than `INSERT DATA`.
    #[error("The execution unit {0} is not supported")]
    UnsupportedExecutionUnit(String),
    /// Inserting a quad failed. `unit` and `quad` are the zero-based positions of the quad in the
    /// request.
    #[error("Cannot insert quad {quad} of unit {unit}: {source}")]
    QuadInsertion {
        unit: usize,
        quad: usize,
        #[source]
        source: InsertionError,
    },
    #[error("The operation has been cancelled")]
    Cancelled,
}

impl ExecutionError {
    /// Returns the [NormalizationError] that caused a failed quad insertion.
    pub fn normalization_error(&self) -> Option<&NormalizationError> {
        match self {
            ExecutionError::QuadInsertion {
                source: InsertionError::Normalization { source, .. },
                ..
            } => Some(source),
            _ => None,
        }
    }

    /// Returns the [StorageError] that caused a failed quad insertion.
    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            ExecutionError::QuadInsertion {
                source: InsertionError::Backend(source),
                ..
            } => Some(source),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExecutionError::Cancelled)
    }
}
