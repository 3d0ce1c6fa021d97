use std::fmt::{Display, Formatter};

/// A URI as it appears in the syntax tree.
///
/// A URI is either written out in full (`<http://example.com/a>`) or as a prefixed name
/// (`ex:a`). Prefixed names must be resolved against the namespaces that are declared for the
/// current operation before they can be interned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UriTerm {
    /// An absolute URI.
    Absolute(String),
    /// A prefixed name that still requires namespace resolution.
    Prefixed {
        /// The prefix (empty for the default prefix `:local`).
        prefix: String,
        /// The local part that is appended to the resolved namespace.
        suffix: String,
    },
}

impl UriTerm {
    /// Creates an absolute URI.
    pub fn absolute(value: impl Into<String>) -> Self {
        Self::Absolute(value.into())
    }

    /// Creates a prefixed name.
    pub fn prefixed(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::Prefixed {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Display for UriTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UriTerm::Absolute(value) => write!(f, "<{value}>"),
            UriTerm::Prefixed { prefix, suffix } => write!(f, "{prefix}:{suffix}"),
        }
    }
}

/// The datatype reference of a literal.
///
/// Parsers either hand over a URI node (absolute or prefixed) or a datatype that has already been
/// resolved to a plain string. The canonical form of the literal depends on which of the two
/// shapes is present.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatatypeRef {
    /// A URI node holding an absolute datatype URI.
    Absolute(String),
    /// A URI node holding a prefixed datatype name.
    Prefixed {
        /// The namespace prefix.
        prefix: String,
        /// The local part.
        suffix: String,
    },
    /// A datatype that the parser already resolved to a plain string.
    Resolved(String),
}

impl Display for DatatypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatatypeRef::Absolute(value) | DatatypeRef::Resolved(value) => {
                write!(f, "<{value}>")
            }
            DatatypeRef::Prefixed { prefix, suffix } => write!(f, "{prefix}:{suffix}"),
        }
    }
}

/// A literal as it appears in the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralTerm {
    /// The lexical value.
    pub value: String,
    /// The optional language tag.
    pub language: Option<String>,
    /// The optional datatype.
    pub datatype: Option<DatatypeRef>,
}

impl LiteralTerm {
    /// Creates a plain literal without language tag or datatype.
    pub fn simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Creates a typed literal.
    pub fn typed(value: impl Into<String>, datatype: DatatypeRef) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype),
        }
    }
}

impl Display for LiteralTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
        }
        if let Some(datatype) = &self.datatype {
            write!(f, "^^{datatype}")?;
        }
        Ok(())
    }
}

/// A term of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Uri(UriTerm),
    Literal(LiteralTerm),
    /// A labelled blank node (`_:label`).
    BlankNode(String),
}

impl Term {
    /// Returns the token name of this term. Used for reporting unsupported terms.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Uri(_) => "uri",
            Term::Literal(_) => "literal",
            Term::BlankNode(_) => "blanknode",
        }
    }
}

impl From<UriTerm> for Term {
    fn from(value: UriTerm) -> Self {
        Term::Uri(value)
    }
}

impl From<LiteralTerm> for Term {
    fn from(value: LiteralTerm) -> Self {
        Term::Literal(value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Uri(uri) => uri.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
            Term::BlankNode(label) => write!(f, "_:{label}"),
        }
    }
}

/// A quad of syntax terms. A missing `graph` denotes the default graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub graph: Option<Term>,
}

impl Quad {
    /// Creates a new [Quad] in the default graph.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// Places this quad into the given `graph`.
    #[must_use]
    pub fn in_graph(mut self, graph: impl Into<Term>) -> Self {
        self.graph = Some(graph.into());
        self
    }
}

impl Display for Quad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(graph) = &self.graph {
            write!(f, " {graph}")?;
        }
        Ok(())
    }
}
