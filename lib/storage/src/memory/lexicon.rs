use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use quadstore_common::Lexicon;
use quadstore_model::{ObjectId, DEFAULT_GRAPH_ID};
use rustc_hash::FxHasher;
use std::fmt::{Display, Formatter};
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A string registered in the lexicon. URIs and literals are kept in separate key spaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexiconEntry {
    Uri(Arc<str>),
    /// A canonical literal string.
    Literal(Arc<str>),
}

impl Display for LexiconEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconEntry::Uri(value) => write!(f, "<{value}>"),
            LexiconEntry::Literal(value) => f.write_str(value),
        }
    }
}

/// Maintains a mapping between canonical term strings and object IDs in memory.
///
/// The mapping happens on two levels: first, all strings are interned, second, the entry that
/// refers to the interned string is mapped to an [ObjectId].
///
/// # Object IDs
///
/// The object ID is a 32-bit unsigned integer. Currently, we simply use a counter to allocate new
/// object IDs. The counter starts at 1 as 0 is reserved for the default graph.
#[derive(Debug)]
pub struct MemLexicon {
    /// Contains the next free object id.
    next_id: AtomicU32,
    /// A set for interning strings.
    str_interning: DashSet<Arc<str>>,
    /// Maps object ids to the registered entries.
    id2entry: DashMap<ObjectId, LexiconEntry, BuildHasherDefault<FxHasher>>,
    /// Maps entries to their object id.
    entry2id: DashMap<LexiconEntry, ObjectId, BuildHasherDefault<FxHasher>>,
}

impl Default for MemLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl MemLexicon {
    /// Creates a new empty [MemLexicon].
    pub fn new() -> Self {
        Self {
            next_id: AtomicU32::new(DEFAULT_GRAPH_ID.as_u32() + 1),
            str_interning: DashSet::new(),
            id2entry: DashMap::with_hasher(BuildHasherDefault::default()),
            entry2id: DashMap::with_hasher(BuildHasherDefault::default()),
        }
    }

    /// Returns the number of registered entries.
    pub fn len(&self) -> usize {
        self.id2entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id2entry.is_empty()
    }

    /// Returns the entry for the given `object_id` if it has been registered.
    pub fn lookup(&self, object_id: ObjectId) -> Option<LexiconEntry> {
        self.id2entry.get(&object_id).map(|entry| entry.value().clone())
    }

    /// Returns the [ObjectId] of the URI `value` without registering it.
    pub fn try_get_uri(&self, value: &str) -> Option<ObjectId> {
        self.try_get_object_id(&LexiconEntry::Uri(Arc::from(value)))
    }

    /// Returns the [ObjectId] of the canonical literal `value` without registering it.
    pub fn try_get_literal(&self, value: &str) -> Option<ObjectId> {
        self.try_get_object_id(&LexiconEntry::Literal(Arc::from(value)))
    }

    fn try_get_object_id(&self, entry: &LexiconEntry) -> Option<ObjectId> {
        self.entry2id.get(entry).map(|entry| *entry)
    }

    fn obtain_object_id(&self, entry: LexiconEntry) -> ObjectId {
        if let Some(object_id) = self.try_get_object_id(&entry) {
            return object_id;
        }

        // Holding the shard lock of the vacant entry guarantees that concurrent registrations of
        // the same string agree on one id.
        match self.entry2id.entry(entry) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => {
                let object_id = ObjectId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
                tracing::trace!(%object_id, entry = %vacant.key(), "registered lexicon entry");
                self.id2entry.insert(object_id, vacant.key().clone());
                vacant.insert(object_id);
                object_id
            }
        }
    }

    fn intern_str(&self, value: &str) -> Arc<str> {
        let found = self.str_interning.get(value);
        match found {
            None => {
                let result = Arc::<str>::from(value);
                self.str_interning.insert(Arc::clone(&result));
                result
            }
            Some(entry) => Arc::clone(entry.key()),
        }
    }
}

#[async_trait]
impl Lexicon for MemLexicon {
    async fn register_uri(&self, value: &str) -> ObjectId {
        let value = self.intern_str(value);
        self.obtain_object_id(LexiconEntry::Uri(value))
    }

    async fn register_literal(&self, value: &str) -> ObjectId {
        let value = self.intern_str(value);
        self.obtain_object_id(LexiconEntry::Literal(value))
    }
}
