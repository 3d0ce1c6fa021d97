use crate::Quad;
use std::fmt::{Display, Formatter};

/// The token of the root node of a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxToken {
    /// A query or update request.
    Query,
    /// Any other root node a parser may produce (e.g., a standalone pattern).
    Other(String),
}

impl Display for SyntaxToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxToken::Query => f.write_str("query"),
            SyntaxToken::Other(token) => f.write_str(token),
        }
    }
}

/// Distinguishes update requests from retrieval queries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Update,
    Query,
    Other(String),
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxKind::Update => f.write_str("update"),
            SyntaxKind::Query => f.write_str("query"),
            SyntaxKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// The declarations that precede the body of a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prologue {
    /// The declared base URI.
    pub base: Option<String>,
    /// The declared namespace prefixes in declaration order.
    pub prefixes: Vec<(String, String)>,
}

impl Prologue {
    /// Adds a prefix declaration.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), namespace.into()));
        self
    }
}

/// A parsed request.
///
/// The units are kept in the parser's own representation (`TUnit`) until the executor asks the
/// parser to materialize them into an [ExecutableUnit].
#[derive(Clone, Debug)]
pub struct SyntaxTree<TUnit> {
    pub token: SyntaxToken,
    pub kind: SyntaxKind,
    pub prologue: Prologue,
    pub units: Vec<TUnit>,
}

impl<TUnit> SyntaxTree<TUnit> {
    /// Creates a new update request.
    pub fn update(prologue: Prologue, units: Vec<TUnit>) -> Self {
        Self {
            token: SyntaxToken::Query,
            kind: SyntaxKind::Update,
            prologue,
            units,
        }
    }

    /// Creates a new retrieval query. Retrieval queries carry no units.
    pub fn query(prologue: Prologue) -> Self {
        Self {
            token: SyntaxToken::Query,
            kind: SyntaxKind::Query,
            prologue,
            units: Vec::new(),
        }
    }
}

/// A single operation of an update request. Only `INSERT DATA` carries its payload since no other
/// unit can be executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutableUnit {
    /// `INSERT DATA { ... }`
    InsertData { quads: Vec<Quad> },
    /// `DELETE DATA { ... }`
    DeleteData,
    /// `DELETE { ... } INSERT { ... } WHERE { ... }`
    Modify,
    /// `LOAD <...>`
    Load,
    /// `CLEAR ...`
    Clear,
    /// `CREATE GRAPH <...>`
    Create,
    /// `DROP ...`
    Drop,
}

impl ExecutableUnit {
    /// Returns the kind name of the unit.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutableUnit::InsertData { .. } => "insertdata",
            ExecutableUnit::DeleteData => "deletedata",
            ExecutableUnit::Modify => "modify",
            ExecutableUnit::Load => "load",
            ExecutableUnit::Clear => "clear",
            ExecutableUnit::Create => "create",
            ExecutableUnit::Drop => "drop",
        }
    }
}
