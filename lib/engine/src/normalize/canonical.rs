use crate::namespace::NamespaceEnvironment;
use crate::options::{CanonicalizerOptions, DatatypePrefixPolicy, LanguageTagSource};
use crate::NormalizationError;
use quadstore_model::{DatatypeRef, LiteralTerm};

/// Produces the string under which a literal is registered in the lexicon.
///
/// The canonical forms are:
/// - `"value"^^<datatype>` for typed literals,
/// - `value@language` for language-tagged literals,
/// - `value` for plain literals.
///
/// Two literals that produce the same string are the same literal for the store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralCanonicalizer {
    options: CanonicalizerOptions,
}

impl LiteralCanonicalizer {
    /// Creates a new [LiteralCanonicalizer].
    pub fn new(options: CanonicalizerOptions) -> Self {
        Self { options }
    }

    /// Returns the canonical string of `literal`.
    ///
    /// Prefixed datatypes are resolved against `env`.
    pub fn canonicalize(
        &self,
        literal: &LiteralTerm,
        env: &NamespaceEnvironment,
    ) -> Result<String, NormalizationError> {
        let value = &literal.value;
        match &literal.datatype {
            Some(DatatypeRef::Absolute(datatype) | DatatypeRef::Resolved(datatype)) => {
                Ok(format!("\"{value}\"^^<{datatype}>"))
            }
            Some(DatatypeRef::Prefixed { prefix, suffix }) => {
                let namespace = self.resolve_datatype_prefix(prefix, env)?;
                Ok(format!("\"{value}\"^^<{namespace}{suffix}>"))
            }
            None => {
                let language = match self.options.language_source {
                    LanguageTagSource::Language => literal.language.as_deref(),
                    LanguageTagSource::LexicalValue => Some(value.as_str()),
                };
                Ok(match language {
                    None => value.clone(),
                    Some(language) => format!("{value}@{language}"),
                })
            }
        }
    }

    fn resolve_datatype_prefix<'env>(
        &self,
        prefix: &str,
        env: &'env NamespaceEnvironment,
    ) -> Result<&'env str, NormalizationError> {
        match (env.resolve(prefix), self.options.datatype_prefix_policy) {
            (Some(namespace), _) => Ok(namespace),
            (None, DatatypePrefixPolicy::Strict) => {
                Err(NormalizationError::UnresolvedPrefix(prefix.to_owned()))
            }
            (None, DatatypePrefixPolicy::Lenient) => {
                tracing::warn!(prefix, "resolving undeclared datatype prefix to an empty namespace");
                Ok("")
            }
        }
    }
}
