use quadstore_model::Prologue;
use std::collections::HashMap;

/// The namespaces that are visible while executing a single update.
///
/// The environment is built once from the prologue of the request and is read-only afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceEnvironment {
    namespaces: HashMap<String, String>,
}

impl NamespaceEnvironment {
    /// Creates an environment without any declared namespaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from the prefix declarations of `prologue`. Later declarations of
    /// the same prefix override earlier ones.
    pub fn from_prologue(prologue: &Prologue) -> Self {
        prologue
            .prefixes
            .iter()
            .fold(Self::new(), |env, (prefix, namespace)| {
                env.with_namespace(prefix.as_str(), namespace.as_str())
            })
    }

    /// Declares `prefix` as an abbreviation of `namespace`.
    #[must_use]
    pub fn with_namespace(
        mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        self.namespaces.insert(prefix.into(), namespace.into());
        self
    }

    /// Returns the namespace declared for `prefix`.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }
}
