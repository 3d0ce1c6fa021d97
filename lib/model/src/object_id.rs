use std::fmt::{Display, Formatter};

/// The object id identifies a canonical term string in the lexicon.
///
/// # Default Graph
///
/// The id `0` is reserved for the default graph ([DEFAULT_GRAPH_ID]). Lexicons never hand out this
/// id, which means it can be used in the graph position of an [IndexKey] without any lookup.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub const MIN: ObjectId = ObjectId(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if this id represents the default graph.
    pub fn is_default_graph(self) -> bool {
        self == DEFAULT_GRAPH_ID
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The id of the default graph.
pub const DEFAULT_GRAPH_ID: ObjectId = ObjectId(0);

/// The key under which a quad is stored in the backend. All components are resolved object ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexKey {
    /// The subject.
    pub subject: ObjectId,
    /// The predicate.
    pub predicate: ObjectId,
    /// The object.
    pub object: ObjectId,
    /// The graph name. [DEFAULT_GRAPH_ID] for the default graph.
    pub graph: ObjectId,
}

impl IndexKey {
    pub fn new(
        subject: ObjectId,
        predicate: ObjectId,
        object: ObjectId,
        graph: ObjectId,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Returns true if the key belongs to the default graph.
    pub fn is_in_default_graph(&self) -> bool {
        self.graph.is_default_graph()
    }
}

impl Display for IndexKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.graph, self.subject, self.predicate, self.object
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graph_id() {
        assert!(DEFAULT_GRAPH_ID.is_default_graph());
        assert!(!ObjectId::new(1).is_default_graph());
        assert_eq!(DEFAULT_GRAPH_ID.as_u32(), 0);
    }

    #[test]
    fn test_display_index_key() {
        let key = IndexKey::new(
            ObjectId::new(1),
            ObjectId::new(2),
            ObjectId::new(3),
            DEFAULT_GRAPH_ID,
        );
        assert!(key.is_in_default_graph());
        insta::assert_snapshot!(key, @"(0, 1, 2, 3)");
    }
}
