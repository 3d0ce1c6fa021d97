mod sparql;

use crate::ParseError;
use async_trait::async_trait;
use quadstore_model::{ExecutableUnit, SyntaxTree};

pub use sparql::SparqlParser;

/// Turns query strings into syntax trees.
///
/// Parsing happens in two steps. First, the whole request is parsed into a [SyntaxTree] whose
/// units are kept in the representation of the parser. Second, the executor asks the parser to
/// materialize each unit into an [ExecutableUnit] right before executing it.
#[async_trait]
pub trait QueryParser: Send + Sync {
    /// The parser's representation of a single unit of a request.
    type Unit: Send + Sync;

    /// Parses `query` into a syntax tree. A failure means that nothing can be executed.
    async fn parse_query_string(&self, query: &str)
        -> Result<SyntaxTree<Self::Unit>, ParseError>;

    /// Materializes a unit of a tree returned by [Self::parse_query_string].
    async fn parse_executable_unit(&self, unit: &Self::Unit) -> Result<ExecutableUnit, ParseError>;
}
