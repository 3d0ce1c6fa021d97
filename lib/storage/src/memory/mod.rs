//! In-memory implementations of the [Lexicon](quadstore_common::Lexicon) and the
//! [QuadBackend](quadstore_common::QuadBackend).
mod backend;
mod lexicon;
mod quad_index;

pub use backend::MemQuadBackend;
pub use lexicon::{LexiconEntry, MemLexicon};
pub use quad_index::MemQuadIndex;
