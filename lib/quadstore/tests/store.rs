#![cfg(test)]
#![allow(clippy::panic_in_result_fn, reason = "Tests may panic")]

use quadstore::engine::{
    CancellationToken, CanonicalizerOptions, DatatypePrefixPolicy, EngineOptions, ExecutionError,
    LanguageTagSource, NormalizationError, ParseError, ParserOptions, UpdateSummary,
};
use quadstore::model::{IndexKey, DEFAULT_GRAPH_ID};
use quadstore::storage::memory::LexiconEntry;
use quadstore::store::Store;
use std::error::Error;
use std::sync::Arc;

const DATA: &str = r#"
PREFIX schema: <http://schema.org/>
PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>

INSERT DATA {
    wd:Q90 a schema:City ;
        schema:name "Paris"@fr ;
        schema:country wd:Q142 ;
        schema:population 2000000 ;
        schema:startDate "-300"^^xsd:gYear ;
        schema:postalCode "75001" .
}
"#;
const NUMBER_OF_QUADS: usize = 6;

#[tokio::test]
async fn test_insert_single_quad() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    store
        .update(r#"INSERT DATA { <http://a> <http://p> "v" }"#)
        .await?;

    let lexicon = store.lexicon();
    assert_eq!(lexicon.len(), 3);
    let key = IndexKey::new(
        lexicon.try_get_uri("http://a").unwrap(),
        lexicon.try_get_uri("http://p").unwrap(),
        lexicon.try_get_literal("v").unwrap(),
        DEFAULT_GRAPH_ID,
    );
    assert_eq!(store.backend().keys().await, vec![key]);
    assert!(store.contains(&key).await);
    Ok(())
}

#[tokio::test]
async fn test_insert_data() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    let summary = store.update(DATA).await?;

    assert_eq!(
        summary,
        UpdateSummary {
            units: 1,
            quads: NUMBER_OF_QUADS
        }
    );
    assert_eq!(store.len().await, NUMBER_OF_QUADS);
    Ok(())
}

#[tokio::test]
async fn test_insert_is_idempotent() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    store.update(DATA).await?;
    let entries = store.lexicon().len();
    store.update(DATA).await?;

    assert_eq!(store.lexicon().len(), entries);
    assert_eq!(store.len().await, NUMBER_OF_QUADS);
    Ok(())
}

#[tokio::test]
async fn test_canonical_literals() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    store.update(DATA).await?;

    let lexicon = store.lexicon();
    assert!(lexicon.try_get_literal("Paris@fr").is_some());
    assert!(lexicon.try_get_literal("75001").is_some());
    assert!(lexicon
        .try_get_literal("\"2000000\"^^<http://www.w3.org/2001/XMLSchema#integer>")
        .is_some());
    assert!(lexicon
        .try_get_literal("\"-300\"^^<http://www.w3.org/2001/XMLSchema#gYear>")
        .is_some());
    Ok(())
}

#[tokio::test]
async fn test_named_graph() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    store
        .update("INSERT DATA { GRAPH <http://g> { <http://s> <http://p> <http://o> } }")
        .await?;

    let graph = store.lexicon().try_get_uri("http://g").unwrap();
    let keys = store.backend().keys().await;
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].graph, graph);
    assert_eq!(store.backend().named_graphs().await, vec![graph]);
    assert_eq!(
        store.lexicon().lookup(graph),
        Some(LexiconEntry::Uri(Arc::from("http://g")))
    );
    Ok(())
}

#[tokio::test]
async fn test_retrieval_query_is_not_implemented() {
    let store = Store::new();

    let error = store
        .update("SELECT * WHERE { ?s ?p ?o }")
        .await
        .unwrap_err();

    assert!(matches!(error, ExecutionError::NotImplemented(_)));
    insta::assert_snapshot!(error, @"A feature has not yet been implemented: Execution of retrieval queries");
}

#[tokio::test]
async fn test_malformed_query_reports_query_syntax() {
    let store = Store::new();

    let error = store
        .update("SELECT ?s WHERE { ?s ?p }")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ExecutionError::Parsing(ParseError::Syntax(_))
    ));
    let message = error.to_string();
    assert!(!message.contains("INSERT"), "{message}");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_syntax_error() {
    let store = Store::new();

    let result = store.update("INSERT DATA { <http://a> <http://p> ").await;

    assert!(matches!(
        result,
        Err(ExecutionError::Parsing(ParseError::Syntax(_)))
    ));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unsupported_units() {
    let store = Store::new();

    for (update, kind) in [
        ("CLEAR ALL", "clear"),
        ("DELETE DATA { <http://a> <http://p> <http://o> }", "deletedata"),
        ("DELETE WHERE { ?s ?p ?o }", "modify"),
        ("CREATE GRAPH <http://g>", "create"),
    ] {
        let error = store.update(update).await.unwrap_err();
        assert!(
            matches!(&error, ExecutionError::UnsupportedExecutionUnit(actual) if actual == kind),
            "Unexpected error for {update}: {error}"
        );
    }
}

#[tokio::test]
async fn test_unsupported_unit_after_insert() {
    let store = Store::new();

    let result = store
        .update("INSERT DATA { <http://a> <http://p> <http://o> } ; CLEAR ALL")
        .await;

    assert!(matches!(
        result,
        Err(ExecutionError::UnsupportedExecutionUnit(_))
    ));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_blank_node_is_rejected() {
    let store = Store::new();

    let error = store
        .update("INSERT DATA { <http://a> <http://p> <http://o> . _:b <http://p> <http://o> }")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ExecutionError::QuadInsertion {
            unit: 0,
            quad: 1,
            ..
        }
    ));
    assert_eq!(
        error.normalization_error(),
        Some(&NormalizationError::UnsupportedTermKind(
            "blanknode".to_owned()
        ))
    );
    insta::assert_snapshot!(error, @"Cannot insert quad 1 of unit 0: Cannot normalize the subject of the quad: Token of kind blanknode cannot be normalized");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_configured_prefix() -> Result<(), Box<dyn Error>> {
    let options = EngineOptions::default()
        .with_parser(ParserOptions::default().with_prefix("ex", "http://example.com/"));
    let store = Store::with_options(options)?;

    store.update("INSERT DATA { ex:s ex:p ex:o }").await?;

    assert!(store.lexicon().try_get_uri("http://example.com/s").is_some());
    Ok(())
}

#[tokio::test]
async fn test_lexical_value_language_source() -> Result<(), Box<dyn Error>> {
    let options = EngineOptions::default().with_canonicalizer(
        CanonicalizerOptions::default()
            .with_language_source(LanguageTagSource::LexicalValue)
            .with_datatype_prefix_policy(DatatypePrefixPolicy::Lenient),
    );
    let store = Store::with_options(options)?;

    store
        .update(r#"INSERT DATA { <http://a> <http://p> "abc", "chat"@fr }"#)
        .await?;

    assert!(store.lexicon().try_get_literal("abc@abc").is_some());
    assert!(store.lexicon().try_get_literal("chat@chat").is_some());
    assert!(store.lexicon().try_get_literal("abc").is_none());
    Ok(())
}

#[test]
fn test_invalid_options() {
    let options = EngineOptions::default()
        .with_parser(ParserOptions::default().with_base_iri("no base"));

    let result = Store::with_options(options);

    assert!(matches!(result, Err(ParseError::InvalidBaseIri { .. })));
}

#[tokio::test]
async fn test_cancelled_update() {
    let store = Store::new();
    let token = CancellationToken::new();
    token.cancel();

    let result = store
        .update_with_cancellation("INSERT DATA { <http://a> <http://p> <http://o> }", &token)
        .await;

    assert!(matches!(result, Err(ExecutionError::Cancelled)));
    assert!(store.is_empty().await);
    assert!(store.lexicon().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    let handles = (0..8)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update(&format!(
                        "INSERT DATA {{ <http://s{i}> <http://p> <http://o> }}"
                    ))
                    .await
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.await??;
    }

    assert_eq!(store.len().await, 8);
    assert_eq!(store.lexicon().len(), 10);
    Ok(())
}

#[test]
fn test_update_in_blocking_context() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    tokio_test::block_on(store.update(DATA))?;

    assert_eq!(tokio_test::block_on(store.len()), NUMBER_OF_QUADS);
    Ok(())
}
