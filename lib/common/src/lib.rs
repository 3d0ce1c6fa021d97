//! The contracts between the update engine and its storage collaborators.
//!
//! The engine only depends on the [Lexicon] and the [QuadBackend] trait. How terms are stored in
//! the lexicon and how keys are indexed is up to the implementations (see `quadstore-storage` for
//! the in-memory ones).

pub mod error;
mod lexicon;
mod quad_backend;

pub use lexicon::{Lexicon, LexiconRef};
pub use quad_backend::{QuadBackend, QuadBackendRef};
