use crate::cancellation::CancellationToken;
use crate::namespace::NamespaceEnvironment;
use crate::normalize::LiteralCanonicalizer;
use crate::NormalizationError;
use quadstore_common::LexiconRef;
use quadstore_model::{ObjectId, Term, UriTerm};

/// Turns syntax terms into object ids by registering them in the lexicon.
#[derive(Clone)]
pub struct TermNormalizer {
    lexicon: LexiconRef,
    canonicalizer: LiteralCanonicalizer,
}

impl TermNormalizer {
    /// Creates a new [TermNormalizer].
    pub fn new(lexicon: LexiconRef, canonicalizer: LiteralCanonicalizer) -> Self {
        Self {
            lexicon,
            canonicalizer,
        }
    }

    /// Returns the object id of `term`, registering it in the lexicon if it is unseen.
    ///
    /// Prefixed URIs are resolved against `env` before they are registered. Blank nodes cannot be
    /// normalized.
    pub async fn normalize(
        &self,
        term: &Term,
        env: &NamespaceEnvironment,
        cancellation: &CancellationToken,
    ) -> Result<ObjectId, NormalizationError> {
        match term {
            Term::Uri(UriTerm::Absolute(iri)) => {
                check_cancellation(cancellation)?;
                Ok(self.lexicon.register_uri(iri).await)
            }
            Term::Uri(UriTerm::Prefixed { prefix, suffix }) => {
                let namespace = env
                    .resolve(prefix)
                    .ok_or_else(|| NormalizationError::UnresolvedPrefix(prefix.clone()))?;
                let iri = format!("{namespace}{suffix}");
                check_cancellation(cancellation)?;
                Ok(self.lexicon.register_uri(&iri).await)
            }
            Term::Literal(literal) => {
                let canonical = self.canonicalizer.canonicalize(literal, env)?;
                check_cancellation(cancellation)?;
                Ok(self.lexicon.register_literal(&canonical).await)
            }
            Term::BlankNode(_) => Err(NormalizationError::UnsupportedTermKind(
                term.kind().to_owned(),
            )),
        }
    }
}

fn check_cancellation(cancellation: &CancellationToken) -> Result<(), NormalizationError> {
    if cancellation.is_cancelled() {
        return Err(NormalizationError::Cancelled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CountingLexicon;
    use quadstore_model::{DatatypeRef, LiteralTerm};
    use quadstore_storage::memory::MemLexicon;
    use std::sync::Arc;

    fn foaf_env() -> NamespaceEnvironment {
        NamespaceEnvironment::new().with_namespace("foaf", "http://xmlns.com/foaf/0.1/")
    }

    fn normalizer() -> TermNormalizer {
        TermNormalizer::new(Arc::new(MemLexicon::new()), LiteralCanonicalizer::default())
    }

    #[tokio::test]
    async fn test_prefixed_and_absolute_uri_agree() {
        let normalizer = normalizer();
        let env = foaf_env();
        let token = CancellationToken::new();

        let prefixed = normalizer
            .normalize(&UriTerm::prefixed("foaf", "name").into(), &env, &token)
            .await
            .unwrap();
        let absolute = normalizer
            .normalize(
                &UriTerm::absolute("http://xmlns.com/foaf/0.1/name").into(),
                &env,
                &token,
            )
            .await
            .unwrap();

        assert_eq!(prefixed, absolute);
    }

    #[tokio::test]
    async fn test_unresolved_prefix() {
        let result = normalizer()
            .normalize(
                &UriTerm::prefixed("unknown", "x").into(),
                &foaf_env(),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(
            result,
            Err(NormalizationError::UnresolvedPrefix("unknown".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_blank_node_is_unsupported() {
        let error = normalizer()
            .normalize(
                &Term::BlankNode("b0".to_owned()),
                &foaf_env(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        insta::assert_snapshot!(error, @"Token of kind blanknode cannot be normalized");
    }

    #[tokio::test]
    async fn test_equal_literals_share_object_id() {
        let normalizer = normalizer();
        let env = NamespaceEnvironment::new()
            .with_namespace("xsd", "http://www.w3.org/2001/XMLSchema#");
        let token = CancellationToken::new();

        let prefixed = LiteralTerm::typed(
            "5",
            DatatypeRef::Prefixed {
                prefix: "xsd".to_owned(),
                suffix: "integer".to_owned(),
            },
        );
        let resolved = LiteralTerm::typed(
            "5",
            DatatypeRef::Resolved("http://www.w3.org/2001/XMLSchema#integer".to_owned()),
        );

        let first = normalizer
            .normalize(&prefixed.into(), &env, &token)
            .await
            .unwrap();
        let second = normalizer
            .normalize(&resolved.into(), &env, &token)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_uri_and_literal_use_different_registrations() {
        let lexicon = Arc::new(CountingLexicon::default());
        let shared_lexicon = Arc::clone(&lexicon);
        let normalizer = TermNormalizer::new(shared_lexicon, LiteralCanonicalizer::default());
        let env = NamespaceEnvironment::new();
        let token = CancellationToken::new();

        normalizer
            .normalize(&UriTerm::absolute("http://a").into(), &env, &token)
            .await
            .unwrap();
        normalizer
            .normalize(&LiteralTerm::language_tagged("v", "en").into(), &env, &token)
            .await
            .unwrap();

        assert_eq!(lexicon.uris(), vec!["http://a".to_owned()]);
        assert_eq!(lexicon.literals(), vec!["v@en".to_owned()]);
    }

    #[tokio::test]
    async fn test_cancelled_before_registration() {
        let lexicon = Arc::new(CountingLexicon::default());
        let shared_lexicon = Arc::clone(&lexicon);
        let normalizer = TermNormalizer::new(shared_lexicon, LiteralCanonicalizer::default());
        let token = CancellationToken::new();
        token.cancel();

        let result = normalizer
            .normalize(
                &UriTerm::absolute("http://a").into(),
                &NamespaceEnvironment::new(),
                &token,
            )
            .await;

        assert_eq!(result, Err(NormalizationError::Cancelled));
        assert_eq!(lexicon.calls(), 0);
    }
}
