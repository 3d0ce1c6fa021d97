use crate::index::{IndexComponent, IndexComponents, IndexQuad, NamedGraphStorage, QuadIndex};
use quadstore_model::{IndexKey, ObjectId};

impl IndexQuad {
    /// Creates a new [IndexQuad] for an index with the given `components`.
    pub fn for_index(key: &IndexKey, components: IndexComponents) -> IndexQuad {
        let components = *components.inner();
        IndexQuad(components.map(|component| match component {
            IndexComponent::GraphName => key.graph,
            IndexComponent::Subject => key.subject,
            IndexComponent::Predicate => key.predicate,
            IndexComponent::Object => key.object,
        }))
    }

    /// Restores the [IndexKey] from a quad sorted for an index with the given `components`.
    pub fn to_key(&self, components: IndexComponents) -> IndexKey {
        let mut gspo = [ObjectId::MIN; 4];
        for (component, id) in components.inner().iter().zip(self.0) {
            gspo[component.gspo_index()] = id;
        }
        let [graph, subject, predicate, object] = gspo;
        IndexKey::new(subject, predicate, object, graph)
    }
}

/// Represents a set of multiple indexes, each of which indexes a different ordering of the
/// quad components (e.g., GSPO, GPOS). Different access patterns require different index
/// structures.
///
/// The [IndexPermutations] keeps all indexes in sync and additionally tracks the named graphs
/// that have been used by a key.
#[derive(Debug)]
pub struct IndexPermutations<TIndex: QuadIndex, TGraphs: NamedGraphStorage> {
    /// The [NamedGraphStorage] that is used to separately store named graphs.
    named_graphs: TGraphs,
    /// The index variations.
    indexes: Vec<TIndex>,
}

impl<TIndex: QuadIndex, TGraphs: NamedGraphStorage> IndexPermutations<TIndex, TGraphs> {
    /// Creates a new [IndexPermutations]. The first index is used for answering lookups.
    pub fn new(named_graphs: TGraphs, indexes: Vec<TIndex>) -> Self {
        Self {
            named_graphs,
            indexes,
        }
    }

    pub fn len(&self) -> usize {
        self.primary_index().map_or(0, |index| index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `key` into every index. Returns false if the key already existed.
    pub fn insert(&mut self, key: &IndexKey) -> bool {
        let mut inserted = false;
        for index in &mut self.indexes {
            let components = index.components();
            inserted = index.insert(IndexQuad::for_index(key, components));
        }

        if !key.is_in_default_graph() {
            self.named_graphs.insert(key.graph);
        }

        inserted
    }

    pub fn contains(&self, key: &IndexKey) -> bool {
        self.primary_index().is_some_and(|index| {
            index.contains(&IndexQuad::for_index(key, index.components()))
        })
    }

    /// Returns all keys in the order of the primary index.
    pub fn keys(&self) -> Vec<IndexKey> {
        let Some(index) = self.primary_index() else {
            return Vec::new();
        };
        let components = index.components();
        index.iter().map(|quad| quad.to_key(components)).collect()
    }

    pub fn named_graphs(&self) -> Vec<ObjectId> {
        let mut graphs = self.named_graphs.iter().collect::<Vec<_>>();
        graphs.sort_unstable();
        graphs
    }

    fn primary_index(&self) -> Option<&TIndex> {
        self.indexes.first()
    }
}
