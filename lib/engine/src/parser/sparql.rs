use crate::options::ParserOptions;
use crate::parser::QueryParser;
use crate::ParseError;
use async_trait::async_trait;
use oxrdf::vocab::xsd;
use oxrdf::NamedNode;
use quadstore_model::{
    DatatypeRef, ExecutableUnit, LiteralTerm, Prologue, Quad, SyntaxTree, Term, UriTerm,
};
use spargebra::term::GraphName;
use spargebra::{GraphUpdateOperation, Query, Update};

/// A [QueryParser] for [SPARQL 1.1](https://www.w3.org/TR/sparql11-query/) queries and updates.
///
/// Prefixed names are expanded while parsing, hence, every URI in the resulting units is
/// absolute. The prefixes of the [ParserOptions] are declared for every request.
#[derive(Clone, Debug, Default)]
pub struct SparqlParser {
    options: ParserOptions,
    /// The prefix declarations of the options in SPARQL syntax.
    declarations: String,
}

impl SparqlParser {
    /// Creates a new [SparqlParser]. Fails if the base IRI or a prefix IRI is invalid.
    pub fn try_new(options: ParserOptions) -> Result<Self, ParseError> {
        if let Some(base_iri) = &options.base_iri {
            NamedNode::new(base_iri).map_err(|error| ParseError::InvalidBaseIri {
                iri: base_iri.clone(),
                error,
            })?;
        }

        let declarations = options
            .prefixes
            .iter()
            .map(|(prefix, iri)| -> Result<String, ParseError> {
                NamedNode::new(iri).map_err(|error| ParseError::InvalidPrefix {
                    prefix: prefix.clone(),
                    iri: iri.clone(),
                    error,
                })?;
                Ok(format!("PREFIX {prefix}: <{iri}>\n"))
            })
            .collect::<Result<String, _>>()?;

        Ok(Self {
            options,
            declarations,
        })
    }

    fn prologue(&self, base: Option<String>) -> Prologue {
        Prologue {
            base: base.or_else(|| self.options.base_iri.clone()),
            prefixes: self.options.prefixes.clone(),
        }
    }
}

#[async_trait]
impl QueryParser for SparqlParser {
    type Unit = GraphUpdateOperation;

    async fn parse_query_string(
        &self,
        query: &str,
    ) -> Result<SyntaxTree<Self::Unit>, ParseError> {
        let text = format!("{}{query}", self.declarations);
        let base_iri = self.options.base_iri.as_deref();

        let query_error = match Query::parse(&text, base_iri) {
            Ok(_) => return Ok(SyntaxTree::query(self.prologue(None))),
            Err(error) => error,
        };

        match Update::parse(&text, base_iri) {
            Ok(update) => {
                let base = update.base_iri.as_ref().map(|iri| iri.as_str().to_owned());
                Ok(SyntaxTree::update(self.prologue(base), update.operations))
            }
            // A malformed SELECT should not be reported with the update grammar.
            Err(_) if starts_with_query_form(query) => Err(query_error.into()),
            Err(error) => Err(error.into()),
        }
    }

    async fn parse_executable_unit(&self, unit: &Self::Unit) -> Result<ExecutableUnit, ParseError> {
        Ok(match unit {
            GraphUpdateOperation::InsertData { data } => ExecutableUnit::InsertData {
                quads: data.iter().map(convert_quad).collect::<Result<_, _>>()?,
            },
            GraphUpdateOperation::DeleteData { .. } => ExecutableUnit::DeleteData,
            GraphUpdateOperation::DeleteInsert { .. } => ExecutableUnit::Modify,
            GraphUpdateOperation::Load { .. } => ExecutableUnit::Load,
            GraphUpdateOperation::Clear { .. } => ExecutableUnit::Clear,
            GraphUpdateOperation::Create { .. } => ExecutableUnit::Create,
            GraphUpdateOperation::Drop { .. } => ExecutableUnit::Drop,
        })
    }
}

/// Returns true if the first keyword after the prologue of `text` opens a retrieval query.
fn starts_with_query_form(text: &str) -> bool {
    let mut rest = text;
    loop {
        rest = rest.trim_start();
        if let Some(comment) = rest.strip_prefix('#') {
            rest = comment.split_once('\n').map_or("", |(_, tail)| tail);
            continue;
        }

        let keyword_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let keyword = rest.get(..keyword_end).unwrap_or_default();
        if keyword.eq_ignore_ascii_case("PREFIX") || keyword.eq_ignore_ascii_case("BASE") {
            // The declaration ends with its IRI reference.
            let Some((_, tail)) = rest.split_once('>') else {
                return false;
            };
            rest = tail;
            continue;
        }

        return ["SELECT", "CONSTRUCT", "DESCRIBE", "ASK"]
            .iter()
            .any(|form| keyword.eq_ignore_ascii_case(form));
    }
}

fn convert_quad(quad: &spargebra::term::Quad) -> Result<Quad, ParseError> {
    let subject = convert_term(oxrdf::Term::from(quad.subject.clone()))?;
    let predicate = convert_named_node(&quad.predicate);
    let object = convert_term(quad.object.clone())?;
    let graph = match &quad.graph_name {
        GraphName::NamedNode(node) => Some(convert_named_node(node)),
        GraphName::DefaultGraph => None,
    };
    Ok(Quad {
        subject,
        predicate,
        object,
        graph,
    })
}

fn convert_named_node(node: &NamedNode) -> Term {
    Term::Uri(UriTerm::absolute(node.as_str()))
}

fn convert_term(term: oxrdf::Term) -> Result<Term, ParseError> {
    Ok(match term {
        oxrdf::Term::NamedNode(node) => convert_named_node(&node),
        oxrdf::Term::BlankNode(node) => Term::BlankNode(node.as_str().to_owned()),
        oxrdf::Term::Literal(literal) => {
            let literal = if let Some(language) = literal.language() {
                LiteralTerm::language_tagged(literal.value(), language)
            } else if literal.datatype() == xsd::STRING {
                LiteralTerm::simple(literal.value())
            } else {
                LiteralTerm::typed(
                    literal.value(),
                    DatatypeRef::Absolute(literal.datatype().as_str().to_owned()),
                )
            };
            Term::Literal(literal)
        }
        #[allow(
            unreachable_patterns,
            reason = "Quoted triples only exist if oxrdf is built with rdf-star"
        )]
        other => return Err(ParseError::UnsupportedTerm(other.to_string())),
    })
}
