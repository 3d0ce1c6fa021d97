/// Defines which field the canonicalizer reads as the language tag of an untyped literal.
///
/// Earlier versions of the engine read the lexical value in place of the language tag. Stores
/// that were populated by such a version must keep [LanguageTagSource::LexicalValue] to produce
/// the same lexicon keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LanguageTagSource {
    /// Reads the language tag of the literal.
    #[default]
    Language,
    /// Reads the lexical value of the literal. Every untyped literal `v` becomes `v@v`.
    LexicalValue,
}

/// Defines how the canonicalizer treats a prefixed datatype whose prefix is not declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatatypePrefixPolicy {
    /// Fails with [NormalizationError::UnresolvedPrefix](crate::NormalizationError::UnresolvedPrefix).
    #[default]
    Strict,
    /// Resolves the prefix to an empty namespace and only keeps the local part.
    Lenient,
}

/// Options for the literal canonicalizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanonicalizerOptions {
    pub language_source: LanguageTagSource,
    pub datatype_prefix_policy: DatatypePrefixPolicy,
}

impl CanonicalizerOptions {
    #[must_use]
    pub fn with_language_source(self, language_source: LanguageTagSource) -> Self {
        Self {
            language_source,
            ..self
        }
    }

    #[must_use]
    pub fn with_datatype_prefix_policy(self, datatype_prefix_policy: DatatypePrefixPolicy) -> Self {
        Self {
            datatype_prefix_policy,
            ..self
        }
    }
}

/// Options for the default SPARQL parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// The base IRI against which relative IRIs are resolved.
    pub base_iri: Option<String>,
    /// Prefixes that are declared for every request in addition to the ones of its prologue.
    pub prefixes: Vec<(String, String)>,
}

impl ParserOptions {
    /// Sets the base IRI.
    #[must_use]
    pub fn with_base_iri(self, base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: Some(base_iri.into()),
            ..self
        }
    }

    /// Declares an additional prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), iri.into()));
        self
    }
}

/// Options for a [QueryEngine](crate::QueryEngine) using the default parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub canonicalizer: CanonicalizerOptions,
    pub parser: ParserOptions,
}

impl EngineOptions {
    #[must_use]
    pub fn with_canonicalizer(self, canonicalizer: CanonicalizerOptions) -> Self {
        Self {
            canonicalizer,
            ..self
        }
    }

    #[must_use]
    pub fn with_parser(self, parser: ParserOptions) -> Self {
        Self { parser, ..self }
    }
}
