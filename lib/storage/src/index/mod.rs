//! Contains general data structures on quad indexes.
//!
//! A quad index represents a particular sorting of the quad components graph name, subject,
//! predicate, and object. For example, the [IndexComponents::GSPO] index represents that exact
//! ordering while the [IndexComponents::GPOS] has the predicate as the second component.
//!
//! The primary trait in this module is the [QuadIndex]. [IndexPermutations] keeps multiple
//! indexes in sync while implementing the reordering logic.

mod components;
mod permutations;

pub use components::*;
pub use permutations::*;
use quadstore_model::ObjectId;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Represents a single instance of a quad index with a given ordering.
pub trait QuadIndex {
    /// Returns the components of the index.
    fn components(&self) -> IndexComponents;

    /// Returns the total number of quads.
    fn len(&self) -> usize;

    /// Returns true if the index holds no quads.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the index contains `quad`.
    fn contains(&self, quad: &IndexQuad) -> bool;

    /// Inserts a quad. Returns false if the quad already existed.
    fn insert(&mut self, quad: IndexQuad) -> bool;

    /// Returns an iterator over all quads in index order.
    fn iter(&self) -> impl Iterator<Item = &IndexQuad>;
}

/// A quad that is sorted for some index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexQuad(pub [ObjectId; 4]);

/// Implements a separate storage for named graphs.
pub trait NamedGraphStorage {
    /// Returns an iterator over all named graphs in the [NamedGraphStorage].
    fn iter(&self) -> impl Iterator<Item = ObjectId>;

    /// Inserts the `graph_name` into the [NamedGraphStorage].
    fn insert(&mut self, graph_name: ObjectId) -> bool;
}

impl<S: BuildHasher> NamedGraphStorage for HashSet<ObjectId, S> {
    fn iter(&self) -> impl Iterator<Item = ObjectId> {
        HashSet::iter(self).copied()
    }

    fn insert(&mut self, graph_name: ObjectId) -> bool {
        HashSet::insert(self, graph_name)
    }
}
