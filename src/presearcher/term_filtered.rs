//! Presearcher backed by query term extraction
//!
//! Registered queries are indexed by the terms a matching document must
//! contain; incoming documents are matched with a disjunction over their
//! distinct tokens, plus one ANY-sentinel clause per populated field so
//! that queries whose obligations degraded to the sentinel are still
//! recalled.

use std::collections::{HashMap, HashSet};

use query::Query;
use document::InputDocument;
use termextractor::{Extractor, QueryTerm, QueryTermExtractor};
use presearcher::{Presearcher, QueryIndexDocument, DocumentTokenFilter, PassThroughFilter};


pub struct TermFilteredPresearcher {
    extractor: QueryTermExtractor,
    filter: Box<DocumentTokenFilter>,
}


impl TermFilteredPresearcher {
    pub fn new(extractors: Vec<Box<Extractor>>) -> TermFilteredPresearcher {
        TermFilteredPresearcher::with_filter(Box::new(PassThroughFilter), extractors)
    }

    pub fn with_filter(filter: Box<DocumentTokenFilter>, extractors: Vec<Box<Extractor>>) -> TermFilteredPresearcher {
        TermFilteredPresearcher::with_extractor(filter, QueryTermExtractor::new(extractors))
    }

    /// Builds a presearcher around a pre-configured extractor, for callers
    /// that need a non-default ANY sentinel token.
    pub fn with_extractor(filter: Box<DocumentTokenFilter>, extractor: QueryTermExtractor) -> TermFilteredPresearcher {
        TermFilteredPresearcher {
            extractor: extractor,
            filter: filter,
        }
    }

    pub fn any_token(&self) -> &str {
        self.extractor.any_token()
    }
}


impl Default for TermFilteredPresearcher {
    fn default() -> TermFilteredPresearcher {
        TermFilteredPresearcher::new(QueryTermExtractor::default_extractors())
    }
}


impl Presearcher for TermFilteredPresearcher {
    fn index_query(&self, query: &Query) -> QueryIndexDocument {
        let query_terms = self.extractor.extract(query);

        debug!("indexing query with {} extracted terms", query_terms.len());

        let mut field_terms: HashMap<String, Vec<String>> = HashMap::new();

        for query_term in query_terms {
            let (field, text) = match query_term {
                QueryTerm::Exact(term) => (term.field, term.text),
                QueryTerm::Any{field} => (field, self.extractor.any_token().to_string()),
            };

            field_terms.entry(field).or_insert_with(Vec::new).push(text);
        }

        let fields = field_terms.into_iter()
                                .map(|(field, texts)| (field, texts.join(" ")))
                                .collect();

        QueryIndexDocument::new(fields)
    }

    fn build_query(&self, document: &InputDocument) -> Query {
        let mut clauses = Vec::new();

        for (field, tokens) in document.fields.iter() {
            let token_stream = self.filter.filter(field, Box::new(tokens.iter().cloned()));

            let mut field_terms = HashSet::new();
            for token in token_stream {
                field_terms.insert(token.term);
            }

            if field_terms.is_empty() {
                continue;
            }

            for term in field_terms {
                clauses.push(Query::Term {
                    field: field.clone(),
                    term: term,
                });
            }

            // Any field that produced a token must also recall queries
            // whose obligations for it degraded to the sentinel
            clauses.push(Query::Term {
                field: field.clone(),
                term: self.extractor.any_token().to_string(),
            });
        }

        debug!("built candidate query with {} clauses", clauses.len());

        Query::new_disjunction(clauses)
    }
}
