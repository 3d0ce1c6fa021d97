//! The execution core of the quadstore.
//!
//! The [QueryEngine] parses a request, resolves every term of the inserted quads into an
//! [ObjectId](quadstore_model::ObjectId) using a [Lexicon](quadstore_common::Lexicon) and indexes
//! the resulting keys in a [QuadBackend](quadstore_common::QuadBackend).

mod cancellation;
mod engine;
pub mod error;
mod insert;
mod namespace;
pub mod normalize;
mod options;
pub mod parser;
#[cfg(test)]
mod test_utils;
mod update;

pub use cancellation::CancellationToken;
pub use engine::QueryEngine;
pub use error::{ExecutionError, InsertionError, NormalizationError, ParseError, QuadPosition};
pub use insert::QuadInserter;
pub use namespace::NamespaceEnvironment;
pub use options::{
    CanonicalizerOptions, DatatypePrefixPolicy, EngineOptions, LanguageTagSource, ParserOptions,
};
pub use update::{UpdateExecutor, UpdateSummary};
