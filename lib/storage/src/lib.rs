//! Contains storage layer implementations for the quadstore update engine.
//!
//! The [memory] module provides a [MemLexicon](memory::MemLexicon) that assigns object ids to
//! canonical term strings and a [MemQuadBackend](memory::MemQuadBackend) that indexes the
//! resulting keys.

pub mod index;
pub mod memory;
