//! Reduces registered queries to term obligations
//!
//! A registered query is indexed by a set of terms that any matching
//! document must contain. Extraction is conservative: when no precise term
//! can be determined for a part of the query, that part degrades to the
//! ANY sentinel rather than failing, so a matching document can never slip
//! past candidate selection. False positives are fine, false negatives are
//! not.

pub mod simple_term;
pub mod phrase;
pub mod conjunction;
pub mod disjunction;

use std::collections::HashSet;

use term::Term;
use query::Query;

pub use termextractor::simple_term::SimpleTermExtractor;
pub use termextractor::phrase::PhraseExtractor;
pub use termextractor::conjunction::ConjunctionExtractor;
pub use termextractor::disjunction::DisjunctionExtractor;


/// A term obligation extracted from a registered query.
///
/// `Exact` pins a field to a specific term; `Any` records that no precise
/// term could be determined for the field, so the query must be treated as
/// a candidate for every document that has any token in that field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryTerm {
    Exact(Term),
    Any {
        field: String,
    },
}


impl QueryTerm {
    pub fn exact(field: &str, text: &str) -> QueryTerm {
        QueryTerm::Exact(Term::new(field, text))
    }

    pub fn any(field: &str) -> QueryTerm {
        QueryTerm::Any {
            field: field.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match *self {
            QueryTerm::Exact(ref term) => &term.field,
            QueryTerm::Any{ref field} => field,
        }
    }

    pub fn is_any(&self) -> bool {
        match *self {
            QueryTerm::Exact(..) => false,
            QueryTerm::Any{..} => true,
        }
    }
}


/// A single term-extraction strategy.
///
/// Each strategy knows how to decompose one query node kind. Returning
/// `None` means the node is not this strategy's kind and the next strategy
/// in the chain should be tried. Composite strategies recurse through
/// `chain` so that custom strategies registered ahead of them take effect
/// inside nested queries too.
pub trait Extractor {
    fn extract(&self, query: &Query, chain: &QueryTermExtractor) -> Option<Vec<QueryTerm>>;
}


/// Runs an ordered list of extraction strategies over a query tree.
///
/// The ANY sentinel token is fixed per instance. It must be a string that
/// no tokenizer can ever produce, otherwise a document could accidentally
/// contain it.
pub struct QueryTermExtractor {
    extractors: Vec<Box<Extractor>>,
    any_token: String,
}


impl QueryTermExtractor {
    pub fn new(extractors: Vec<Box<Extractor>>) -> QueryTermExtractor {
        QueryTermExtractor::with_any_token(extractors, "__ANYTOKEN__")
    }

    pub fn with_any_token(extractors: Vec<Box<Extractor>>, any_token: &str) -> QueryTermExtractor {
        QueryTermExtractor {
            extractors: extractors,
            any_token: any_token.to_string(),
        }
    }

    /// The standard strategy list, covering every built-in query kind that
    /// has extractable terms.
    pub fn default_extractors() -> Vec<Box<Extractor>> {
        vec![
            Box::new(SimpleTermExtractor),
            Box::new(PhraseExtractor),
            Box::new(ConjunctionExtractor),
            Box::new(DisjunctionExtractor),
        ]
    }

    pub fn any_token(&self) -> &str {
        &self.any_token
    }

    pub fn extract(&self, query: &Query) -> HashSet<QueryTerm> {
        self.extract_node(query).into_iter().collect()
    }

    /// Runs the strategy chain over a single node.
    ///
    /// The first strategy that recognises the node kind wins. Nodes no
    /// strategy recognises (ranges, wildcards, custom leaves) degrade to
    /// the ANY sentinel on every field they touch; this is the deliberate
    /// conservative default, not an error.
    pub fn extract_node(&self, query: &Query) -> Vec<QueryTerm> {
        for extractor in self.extractors.iter() {
            if let Some(terms) = extractor.extract(query, self) {
                return terms;
            }
        }

        query.fields().into_iter().map(QueryTerm::any).collect()
    }
}
