//! The data model shared by the crates of the quadstore workspace.
//!
//! It contains the terms of the syntax tree handed over by parsers ([Term], [Quad],
//! [SyntaxTree], [ExecutableUnit]) and the encoded representation that is stored in the backend
//! ([ObjectId], [IndexKey]).

mod object_id;
mod syntax;
mod term;

pub use object_id::{IndexKey, ObjectId, DEFAULT_GRAPH_ID};
pub use syntax::{ExecutableUnit, Prologue, SyntaxKind, SyntaxToken, SyntaxTree};
pub use term::{DatatypeRef, LiteralTerm, Quad, Term, UriTerm};
