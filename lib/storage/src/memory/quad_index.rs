use crate::index::{IndexComponents, IndexQuad, QuadIndex};
use std::collections::BTreeSet;

/// Represents a single permutation of a quad index held in-memory. The index is sorted from left
/// to right.
///
/// Given the [IndexComponents] GPOS, the index could look like this:
/// ```text
/// ?graph   ?predicate  ?object  ?subject
/// ┌─────┐    ┌─────┐   ┌─────┐   ┌─────┐
/// │   0 │    │   1 │   │   4 │   │   4 │
/// ├─────┤    ├─────┤   ├─────┤   ├─────┤
/// │   0 │    │   1 │   │   7 │   │   7 │
/// ├─────┤    ├─────┤   ├─────┤   ├─────┤
/// │   0 │    │   2 │   │   1 │   │   1 │
/// ├─────┤    ├─────┤   ├─────┤   ├─────┤
/// │ ... │    │ ... │   │ ... │   │ ... │
/// └─────┘    └─────┘   └─────┘   └─────┘
/// ```
#[derive(Debug)]
pub struct MemQuadIndex {
    /// The index content.
    data: BTreeSet<IndexQuad>,
    /// Differentiates between multiple configurations (e.g., GSPO, GPOS).
    components: IndexComponents,
}

impl MemQuadIndex {
    /// Creates a new empty [MemQuadIndex].
    pub fn new(components: IndexComponents) -> Self {
        Self {
            data: BTreeSet::new(),
            components,
        }
    }
}

impl QuadIndex for MemQuadIndex {
    fn components(&self) -> IndexComponents {
        self.components
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn contains(&self, quad: &IndexQuad) -> bool {
        self.data.contains(quad)
    }

    fn insert(&mut self, quad: IndexQuad) -> bool {
        self.data.insert(quad)
    }

    fn iter(&self) -> impl Iterator<Item = &IndexQuad> {
        self.data.iter()
    }
}
